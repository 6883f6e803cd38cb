//! Keyboard bindings.
//!
//! Movement keys act every frame they are held. Toggles fire once on the
//! press edge, so holding a key never flickers a light.

use interior_platform::{InputState, KeyCode};
use interior_scene::{CameraMode, CameraMovement, Channel, Dolly};

/// A discrete state flip triggered by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    CameraMode,
    Directional,
    PointLight(usize),
    Spot,
    /// Scene-wide channel toggle over the lit point lights and the sun.
    Channel(Channel),
}

/// Something to do this frame because a key is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeldAction {
    Move(CameraMovement),
    Dolly(Dolly),
    Orbit,
    StartFan,
    StopFan,
    Quit,
}

const TOGGLES: [(KeyCode, Toggle); 8] = [
    (KeyCode::KeyB, Toggle::CameraMode),
    (KeyCode::Digit1, Toggle::Directional),
    (KeyCode::Digit2, Toggle::PointLight(0)),
    (KeyCode::Digit3, Toggle::PointLight(1)),
    (KeyCode::Digit4, Toggle::Spot),
    (KeyCode::Digit5, Toggle::Channel(Channel::Ambient)),
    (KeyCode::Digit6, Toggle::Channel(Channel::Diffuse)),
    (KeyCode::Digit7, Toggle::Channel(Channel::Specular)),
];

const FREE_MOVEMENT: [(KeyCode, CameraMovement); 12] = [
    (KeyCode::KeyW, CameraMovement::Forward),
    (KeyCode::KeyS, CameraMovement::Backward),
    (KeyCode::KeyA, CameraMovement::Left),
    (KeyCode::KeyD, CameraMovement::Right),
    (KeyCode::KeyE, CameraMovement::Up),
    (KeyCode::KeyR, CameraMovement::Down),
    (KeyCode::KeyX, CameraMovement::PitchUp),
    (KeyCode::KeyC, CameraMovement::PitchDown),
    (KeyCode::KeyY, CameraMovement::YawLeft),
    (KeyCode::KeyT, CameraMovement::YawRight),
    (KeyCode::KeyZ, CameraMovement::RollLeft),
    (KeyCode::KeyV, CameraMovement::RollRight),
];

const BIRD_EYE_MOVEMENT: [(KeyCode, Dolly); 2] = [
    (KeyCode::KeyW, Dolly::Forward),
    (KeyCode::KeyS, Dolly::Backward),
];

/// Toggles whose key went down this frame, in binding order.
pub fn pressed_toggles(input: &InputState) -> Vec<Toggle> {
    TOGGLES
        .iter()
        .filter(|(key, _)| input.is_key_just_pressed(*key))
        .map(|&(_, toggle)| toggle)
        .collect()
}

/// Actions for every held key, given the camera mode in effect.
///
/// Free-camera movement and orbiting are ignored while the bird's-eye camera
/// is active; W and S dolly it instead.
pub fn held_actions(input: &InputState, mode: CameraMode) -> Vec<HeldAction> {
    let mut actions = Vec::new();

    if input.is_key_pressed(KeyCode::Escape) {
        actions.push(HeldAction::Quit);
    }
    if input.is_key_pressed(KeyCode::KeyO) {
        actions.push(HeldAction::StartFan);
    }
    if input.is_key_pressed(KeyCode::KeyP) {
        actions.push(HeldAction::StopFan);
    }

    match mode {
        CameraMode::Free => {
            actions.extend(
                FREE_MOVEMENT
                    .iter()
                    .filter(|(key, _)| input.is_key_pressed(*key))
                    .map(|&(_, movement)| HeldAction::Move(movement)),
            );
            if input.is_key_pressed(KeyCode::KeyF) {
                actions.push(HeldAction::Orbit);
            }
        }
        CameraMode::BirdEye => {
            actions.extend(
                BIRD_EYE_MOVEMENT
                    .iter()
                    .filter(|(key, _)| input.is_key_pressed(*key))
                    .map(|&(_, direction)| HeldAction::Dolly(direction)),
            );
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_fires_once() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::Digit2);
        assert_eq!(pressed_toggles(&input), vec![Toggle::PointLight(0)]);

        input.begin_frame();
        assert!(pressed_toggles(&input).is_empty());
    }

    #[test]
    fn test_w_depends_on_mode() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::KeyW);

        assert_eq!(
            held_actions(&input, CameraMode::Free),
            vec![HeldAction::Move(CameraMovement::Forward)]
        );
        assert_eq!(
            held_actions(&input, CameraMode::BirdEye),
            vec![HeldAction::Dolly(Dolly::Forward)]
        );
    }

    #[test]
    fn test_free_only_keys_ignored_in_bird_eye() {
        let mut input = InputState::new();
        for key in [KeyCode::KeyA, KeyCode::KeyX, KeyCode::KeyF] {
            input.on_key_pressed(key);
        }
        assert!(held_actions(&input, CameraMode::BirdEye).is_empty());
        assert_eq!(held_actions(&input, CameraMode::Free).len(), 3);
    }

    #[test]
    fn test_fan_and_quit_in_any_mode() {
        let mut input = InputState::new();
        input.on_key_pressed(KeyCode::KeyO);
        input.on_key_pressed(KeyCode::Escape);
        let actions = held_actions(&input, CameraMode::BirdEye);
        assert!(actions.contains(&HeldAction::StartFan));
        assert!(actions.contains(&HeldAction::Quit));
    }
}
