use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::collides;
use crate::entities::{Bird, Pipe, PlayArea};
use crate::physics::{BirdMotion, PipeMotion};
use crate::settings::GameSettings;

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Playing,
    GameOver,
}

/// Per-frame ordering: input is read, the game advances, then it is drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Render,
}

#[derive(Resource)]
pub struct GameRng(pub StdRng);

/// The jump key was released this frame.
#[derive(Event, Default)]
pub struct JumpEvent;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOverCause {
    OutOfBounds,
    Collision,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FrameOutcome {
    Running,
    GameOver(GameOverCause),
}

#[derive(Resource, Clone, Debug)]
pub struct GameState {
    pub area: PlayArea,
    pub bird: Bird,
    pub pipe: Pipe,
    pub score: u32,
}

impl GameState {
    pub fn new(settings: &GameSettings) -> Self {
        let area = settings.play_area();
        Self {
            area,
            bird: Bird::new(
                settings.bird_size,
                settings.gravity,
                settings.bird_color,
                area,
            ),
            pipe: Pipe::new(
                settings.pipe_width,
                settings.pipe_gap,
                settings.pipe_base_speed,
                settings.pipe_color,
                area,
            ),
            score: 0,
        }
    }

    /// One frame: jump, move the bird, move the pipe, test collision.
    ///
    /// The pipe still moves (and may score) on the frame the bird leaves
    /// the play area.
    pub fn advance_frame<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        jumped: bool,
        settings: &GameSettings,
        rng: &mut R,
    ) -> FrameOutcome {
        let mut cause = None;

        if jumped {
            self.bird.jump(settings);
        }

        if self.bird.advance(dt, settings, self.area) == BirdMotion::OutOfBounds {
            cause = Some(GameOverCause::OutOfBounds);
        }

        if self.pipe.advance(dt, settings, self.area, rng) == PipeMotion::Passed {
            self.score += 1;
            debug!(
                score = self.score,
                gap_y = self.pipe.gap_y,
                speed = self.pipe.speed,
                "pipe recycled"
            );
        }

        if collides(&self.bird, &self.pipe) {
            cause = cause.or(Some(GameOverCause::Collision));
        }

        match cause {
            Some(cause) => FrameOutcome::GameOver(cause),
            None => FrameOutcome::Running,
        }
    }
}

pub struct SimPlugin;
impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>()
            .init_state::<AppState>()
            .add_event::<JumpEvent>()
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Simulate, FrameSet::Render).chain(),
            )
            .add_systems(Startup, start_game)
            .add_systems(
                Update,
                frame_step
                    .in_set(FrameSet::Simulate)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnEnter(AppState::GameOver), exit_on_game_over);
    }
}

fn start_game(mut commands: Commands, settings: Res<GameSettings>) {
    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        width = settings.width,
        height = settings.height,
        seeded = settings.seed.is_some(),
        "starting game"
    );
    commands.insert_resource(GameRng(rng));
    commands.insert_resource(GameState::new(&settings));
}

fn frame_step(
    time: Res<Time>,
    settings: Res<GameSettings>,
    mut jumps: EventReader<JumpEvent>,
    mut state: ResMut<GameState>,
    mut rng: ResMut<GameRng>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    // Several releases inside one frame still make a single jump.
    let jumped = jumps.read().count() > 0;

    if let FrameOutcome::GameOver(cause) =
        state.advance_frame(time.delta_seconds(), jumped, &settings, &mut rng.0)
    {
        info!(?cause, score = state.score, "game over");
        next_state.set(AppState::GameOver);
    }
}

fn exit_on_game_over(state: Res<GameState>, mut exit: EventWriter<AppExit>) {
    info!(score = state.score, "exiting");
    exit.send(AppExit::Success);
}
