//! Scene composition
//!
//! Turns a `GameState` into an ordered list of draw commands. Backends only
//! execute the list; nothing here touches the browser.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, GROUND_HEIGHT};
use crate::sim::{GamePhase, GameState, SpriteKind};

/// Images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteImage {
    Bird,
    Pipe,
    Finish,
    Ground,
}

impl SpriteImage {
    pub const ALL: [SpriteImage; 4] = [
        SpriteImage::Bird,
        SpriteImage::Pipe,
        SpriteImage::Finish,
        SpriteImage::Ground,
    ];

    /// File name under the asset base URL
    pub fn file(&self) -> &'static str {
        match self {
            SpriteImage::Bird => "flappybird.png",
            SpriteImage::Pipe => "flappypipe.png",
            SpriteImage::Finish => "flappyend.png",
            SpriteImage::Ground => "flappybottom.png",
        }
    }

    fn for_kind(kind: SpriteKind) -> Self {
        match kind {
            SpriteKind::Bird => SpriteImage::Bird,
            SpriteKind::PipeTop | SpriteKind::PipeBottom => SpriteImage::Pipe,
            SpriteKind::Finish => SpriteImage::Finish,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Wipe the whole field
    Clear,
    /// Image stretched over a box, rotated about its center
    Sprite {
        image: SpriteImage,
        pos: Vec2,
        size: Vec2,
        /// Degrees, clockwise
        angle: f32,
        flip_v: bool,
        flip_h: bool,
    },
    /// Image at its natural size
    Image { image: SpriteImage, pos: Vec2 },
    Text {
        text: String,
        pos: Vec2,
        size_px: u32,
        color: &'static str,
        align: TextAlign,
    },
}

impl DrawCmd {
    fn text(text: impl Into<String>, x: f32, y: f32, size_px: u32, color: &'static str) -> Self {
        DrawCmd::Text {
            text: text.into(),
            pos: Vec2::new(x, y),
            size_px,
            color,
            align: TextAlign::Center,
        }
    }
}

/// Build the draw list for one frame
pub fn compose(state: &GameState, player: &str) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(state.pipes.len() + 8);
    cmds.push(DrawCmd::Clear);

    let sprites = std::iter::once(&state.bird).chain(state.pipes.iter());
    for sprite in sprites.filter(|s| s.visible) {
        cmds.push(DrawCmd::Sprite {
            image: SpriteImage::for_kind(sprite.kind),
            pos: sprite.pos,
            size: sprite.size,
            angle: sprite.angle,
            flip_v: sprite.flip_v,
            flip_h: sprite.flip_h,
        });
    }

    cmds.push(DrawCmd::Image {
        image: SpriteImage::Ground,
        pos: Vec2::new(state.ground_offset, FIELD_HEIGHT - GROUND_HEIGHT),
    });

    let center = FIELD_WIDTH / 2.0;
    match state.phase {
        GamePhase::Prestart => {
            cmds.push(DrawCmd::text(
                "Press, touch or click to start",
                center,
                FIELD_HEIGHT / 4.0,
                25,
                "red",
            ));
        }
        GamePhase::Running => {
            cmds.push(DrawCmd::text(format!("Player: {player}"), 60.0, 30.0, 18, "black"));
        }
        GamePhase::Over => {
            let score = state.final_score.unwrap_or_else(|| state.score());
            cmds.push(DrawCmd::text("Game Over", center, 100.0, 30, "red"));
            cmds.push(DrawCmd::text(format!("Score: {score}"), center, 150.0, 30, "red"));
            cmds.push(DrawCmd::text(
                "Click, touch, or press to play again",
                center,
                300.0,
                20,
                "red",
            ));
            cmds.push(DrawCmd::text(format!("Player: {player}"), center, 350.0, 18, "black"));
        }
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, handle_input, tick};

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_prestart_scene() {
        let state = GameState::default();
        let cmds = compose(&state, "alice");
        assert_eq!(cmds[0], DrawCmd::Clear);
        // Bird plus 26 segments plus finish
        let sprites = cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Sprite { .. }))
            .count();
        assert_eq!(sprites, 28);
        assert_eq!(texts(&cmds), ["Press, touch or click to start"]);
    }

    #[test]
    fn test_running_shows_player() {
        let mut state = GameState::default();
        handle_input(&mut state, 0.0);
        let cmds = compose(&state, "alice");
        assert_eq!(texts(&cmds), ["Player: alice"]);
    }

    #[test]
    fn test_over_shows_score() {
        let mut state = GameState::default();
        state.pipes.clear();
        handle_input(&mut state, 0.0);
        state.bird.pos.y = 0.0;
        state.bird.vel.y = -10.0;
        tick(&mut state, &TickInput::default(), 0.0);
        let cmds = compose(&state, "bob");
        assert_eq!(
            texts(&cmds),
            [
                "Game Over",
                "Score: 0",
                "Click, touch, or press to play again",
                "Player: bob",
            ]
        );
    }

    #[test]
    fn test_hidden_sprites_skipped() {
        let mut state = GameState::default();
        for pipe in &mut state.pipes {
            pipe.visible = false;
        }
        let cmds = compose(&state, "x");
        let images: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Sprite { image, .. } => Some(*image),
                _ => None,
            })
            .collect();
        assert_eq!(images, [SpriteImage::Bird]);
    }

    #[test]
    fn test_pipe_mirroring_carried() {
        let state = GameState::default();
        let cmds = compose(&state, "x");
        let flips: Vec<bool> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Sprite {
                    image: SpriteImage::Pipe,
                    flip_v,
                    ..
                } => Some(*flip_v),
                _ => None,
            })
            .take(2)
            .collect();
        assert_eq!(flips, [false, true]);
    }
}
