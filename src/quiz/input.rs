use std::sync::Arc;

use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, AsyncComputeTaskPool, Task};
use bevy::window::PrimaryWindow;

use super::flow::{ClickEffect, QuizFlow, QuizScreen, QuizSettings};
use super::question::QuestionRecord;
use super::source::RemoteQuestions;
use crate::error::FetchError;

/// Remote provider the API button fetches from.
#[derive(Resource, Clone)]
pub struct QuestionProvider(pub Arc<dyn RemoteQuestions>);

#[derive(Resource)]
struct PendingFetch(Task<Result<Vec<QuestionRecord>, FetchError>>);

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (route_clicks, poll_fetch, sync_screen).chain(),
        );
    }
}

fn route_clicks(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut mousebtn_evr: EventReader<MouseButtonInput>,
    mut flow: ResMut<QuizFlow>,
    provider: Res<QuestionProvider>,
    settings: Res<QuizSettings>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Ok(win) = windows.get_single() else {
        return;
    };

    for ev in mousebtn_evr.read() {
        if ev.state != ButtonState::Pressed || ev.button != MouseButton::Left {
            continue;
        }
        let Some(cursor) = win.cursor_position() else {
            continue;
        };
        match flow.handle_click(cursor) {
            ClickEffect::None => {}
            ClickEffect::StartFetch => {
                let source = provider.0.clone();
                let amount = settings.amount;
                let task = AsyncComputeTaskPool::get().spawn(async move { source.fetch(amount) });
                commands.insert_resource(PendingFetch(task));
                info!("fetching {amount} questions");
            }
            ClickEffect::Exit => {
                ev_exit.send(AppExit::Success);
            }
        }
    }
}

/// Hands a finished fetch to the flow in one step.
fn poll_fetch(
    mut commands: Commands,
    pending: Option<ResMut<PendingFetch>>,
    mut flow: ResMut<QuizFlow>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    if let Some(result) = block_on(future::poll_once(&mut pending.0)) {
        flow.complete_fetch(result);
        commands.remove_resource::<PendingFetch>();
    }
}

fn sync_screen(
    flow: Res<QuizFlow>,
    screen: Res<State<QuizScreen>>,
    mut next_screen: ResMut<NextState<QuizScreen>>,
) {
    let wanted = flow.screen();
    if *screen.get() != wanted {
        debug!("screen {:?} -> {:?}", screen.get(), wanted);
        next_screen.set(wanted);
    }
}
