use fly_camera::{CameraError, CameraMovement, FirstPersonCamera};
use glam::{Mat4, Vec3, Vec4};

const EPS: f32 = 1e-5;

fn lesson_camera() -> FirstPersonCamera {
    FirstPersonCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0)
}

fn assert_orthonormal(camera: &FirstPersonCamera) {
    let (f, r, u) = (camera.front(), camera.right(), camera.up());
    for v in [f, r, u] {
        assert!((v.length() - 1.0).abs() < EPS, "not unit length: {v:?}");
    }
    assert!(f.dot(r).abs() < EPS, "front·right = {}", f.dot(r));
    assert!(f.dot(u).abs() < EPS, "front·up = {}", f.dot(u));
    assert!(r.dot(u).abs() < EPS, "right·up = {}", r.dot(u));
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_pitch_never_reaches_pole() {
        for offset in [1.0e6, -1.0e6, 900.0, -900.0, 1.0e30, -1.0e30] {
            let mut camera = lesson_camera();
            camera.apply_mouse_delta(0.0, offset);
            assert!(
                camera.pitch().abs() <= 89.0,
                "pitch {} escaped for offset {}",
                camera.pitch(),
                offset
            );
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_basis_stays_orthonormal_over_many_updates() {
        let mut camera = lesson_camera();
        // deterministic pseudo-random walk, including large swings
        let mut seed = 12345u32;
        for _ in 0..2_000 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let dx = ((seed >> 8) % 2_001) as f32 - 1_000.0;
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let dy = ((seed >> 8) % 2_001) as f32 - 1_000.0;

            camera.apply_mouse_delta(dx, dy);
            assert_orthonormal(&camera);
            assert!(camera.pitch().abs() <= 89.0);
        }
    }

    #[test]
    fn test_yaw_turns_front_horizontally() {
        let mut camera = lesson_camera();
        // +90 degrees of yaw at sensitivity 0.1
        camera.apply_mouse_delta(900.0, 0.0);
        assert!((camera.yaw() - 0.0).abs() < 1e-3);
        assert!(camera.front().abs_diff_eq(Vec3::X, 1e-4));
        assert!(camera.up().abs_diff_eq(Vec3::Y, 1e-4));
    }
}

#[cfg(test)]
mod zoom_tests {
    use super::*;

    #[test]
    fn test_scroll_saturates_at_bounds() {
        let mut camera = lesson_camera();
        assert_eq!(camera.zoom(), 45.0);

        camera.apply_scroll(1000.0);
        assert_eq!(camera.zoom(), 1.0);

        camera.apply_scroll(-1000.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn test_scroll_sequence_stays_in_range() {
        let mut camera = lesson_camera();
        for offset in [3.0, -7.5, 100.0, 0.25, -0.25, -55.0, 44.0, 1.0] {
            camera.apply_scroll(offset);
            assert!((1.0..=45.0).contains(&camera.zoom()), "zoom {}", camera.zoom());
        }
    }
}

#[cfg(test)]
mod view_matrix_tests {
    use super::*;

    #[test]
    fn test_view_matches_standard_look_at() {
        let camera = lesson_camera();
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 2.0), Vec3::Y);
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_inverse_view_maps_origin_to_position() {
        let mut camera = FirstPersonCamera::new(Vec3::new(4.0, -2.0, 7.5), Vec3::Y, 33.0, -12.0);
        camera.apply_mouse_delta(120.0, 45.0);

        let eye = camera.view_matrix().inverse() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(eye.truncate().abs_diff_eq(camera.position(), 1e-4));
    }

    #[test]
    fn test_view_looks_down_negative_z_in_eye_space() {
        let camera = lesson_camera();
        let ahead = camera.position() + camera.front();
        let in_view = camera.view_matrix().transform_point3(ahead);
        assert!(in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_then_backward_round_trip() {
        let mut camera = FirstPersonCamera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 17.0, 25.0);
        let start = camera.position();

        camera.apply_movement(CameraMovement::Forward, 0.37).unwrap();
        assert!(!camera.position().abs_diff_eq(start, EPS));
        camera.apply_movement(CameraMovement::Backward, 0.37).unwrap();

        assert!(camera.position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn test_forward_moves_along_front() {
        let mut camera = lesson_camera();
        camera.apply_movement(CameraMovement::Forward, 1.0).unwrap();
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), EPS));
    }

    #[test]
    fn test_negative_delta_time_rejected() {
        for direction in [
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
        ] {
            let mut camera = lesson_camera();
            let result = camera.apply_movement(direction, -1.0);

            assert!(matches!(
                result,
                Err(CameraError::InvalidArgument { name: "delta_time", .. })
            ));
            assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
        }
    }

    #[test]
    fn test_movement_speed_is_tunable() {
        let mut camera = lesson_camera();
        camera.set_movement_speed(10.0);
        camera.apply_movement(CameraMovement::Right, 0.5).unwrap();
        assert!(camera.position().abs_diff_eq(Vec3::new(5.0, 0.0, 3.0), EPS));
    }
}
