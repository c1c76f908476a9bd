/// Rotation applied to each axis every unpaused frame, in radians
pub const ROTATION_SPEED: f64 = 0.02;

/// Rotation state of the active shape
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    /// Radians added to every axis per frame
    pub speed: f64,
    /// Rotation paused
    pub paused: bool,
    /// Current rotation angles around X, Y and Z
    pub angles: [f64; 3],
}

impl Default for RotationState {
    fn default() -> Self {
        RotationState {
            speed: ROTATION_SPEED,
            paused: false,
            angles: [0.0; 3],
        }
    }
}

impl RotationState {
    /// Advances one frame unless paused. Angles are never wrapped.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        for angle in self.angles.iter_mut() {
            *angle += self.speed;
        }
    }

    pub fn reset(&mut self) {
        self.angles = [0.0; 3];
    }
}

/// The two mutually exclusive UI modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Selection,
    Detail,
}

/// Visibility of the UI regions and the text of the detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panels {
    pub controls: bool,
    pub return_button: bool,
    pub animation_controls: bool,
    pub shape_details: bool,
    pub project_name: bool,
    pub shape_title: String,
    pub shape_description: String,
}

impl Panels {
    /// Panel layout for the selection screen
    pub fn selection() -> Self {
        Panels {
            controls: true,
            return_button: false,
            animation_controls: false,
            shape_details: false,
            project_name: true,
            shape_title: String::new(),
            shape_description: String::new(),
        }
    }

    /// Panel layout for the detail screen showing `title` and `description`
    pub fn detail(title: &str, description: &str) -> Self {
        Panels {
            controls: false,
            return_button: true,
            animation_controls: true,
            shape_details: true,
            project_name: false,
            shape_title: title.to_owned(),
            shape_description: description.to_owned(),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.shape_details {
            Screen::Detail
        } else {
            Screen::Selection
        }
    }
}

impl Default for Panels {
    fn default() -> Self {
        Panels::selection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_rotation_does_not_advance() {
        let mut rotation = RotationState {
            paused: true,
            ..RotationState::default()
        };
        rotation.advance();
        assert_eq!(rotation.angles, [0.0; 3]);
    }

    #[test]
    fn screens_are_mutually_exclusive() {
        let selection = Panels::selection();
        let detail = Panels::detail("Cube", "A cube.");
        assert_eq!(selection.screen(), Screen::Selection);
        assert_eq!(detail.screen(), Screen::Detail);
        for panels in [selection, detail] {
            assert_ne!(panels.controls, panels.shape_details);
            assert_eq!(panels.return_button, panels.animation_controls);
            assert_eq!(panels.controls, panels.project_name);
        }
    }
}
