#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::{EnemyPhase, GamePhase, PlayerMode};
    use crate::events::GameEvent;
    use crate::geom;
    use crate::state::{BeamView, EnemyView, GameSnapshot};
    use crate::types::{Rect, SimTime};

    const EPS: f64 = 1e-9;

    // ---- Angle arithmetic ----

    #[test]
    fn test_wrap_degrees() {
        assert!((geom::wrap_degrees(0.0) - 0.0).abs() < EPS);
        assert!((geom::wrap_degrees(360.0) - 0.0).abs() < EPS);
        assert!((geom::wrap_degrees(-35.0) - 325.0).abs() < EPS);
        assert!((geom::wrap_degrees(725.0) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_angle_of_cardinals() {
        assert!((geom::angle_of(DVec2::new(1.0, 0.0)) - 0.0).abs() < EPS);
        assert!((geom::angle_of(DVec2::new(0.0, 1.0)) - 90.0).abs() < EPS);
        assert!((geom::angle_of(DVec2::new(-1.0, 0.0)) - 180.0).abs() < EPS);
        assert!((geom::angle_of(DVec2::new(0.0, -1.0)) - 270.0).abs() < EPS);
    }

    #[test]
    fn test_angle_of_zero_vector_is_zero() {
        // Defined-away degenerate case: no direction reads as 0 degrees.
        assert!((geom::angle_of(DVec2::ZERO) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_vec_from_angle_round_trip() {
        for deg in [0.0, 45.0, 123.4, 270.0, 359.0] {
            let v = geom::vec_from_angle(deg);
            assert!((v.length() - 1.0).abs() < 1e-12);
            assert!((geom::angle_of(v) - deg).abs() < 1e-9, "deg {deg}");
        }
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = geom::rotate(DVec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    // ---- Arc membership ----

    #[test]
    fn test_angle_in_arc_simple() {
        // Arc centered at 90 with width 90 covers [45, 135].
        assert!(geom::angle_in_arc(90.0, 90.0, 90.0));
        assert!(geom::angle_in_arc(45.0, 90.0, 90.0), "lower boundary");
        assert!(geom::angle_in_arc(135.0, 90.0, 90.0), "upper boundary");
        assert!(!geom::angle_in_arc(44.9, 90.0, 90.0));
        assert!(!geom::angle_in_arc(135.1, 90.0, 90.0));
        assert!(!geom::angle_in_arc(270.0, 90.0, 90.0));
    }

    #[test]
    fn test_angle_in_arc_straddles_zero() {
        // Center 10, width 90: the arc is [325, 360) u [0, 55].
        assert!(geom::angle_in_arc(350.0, 10.0, 90.0));
        assert!(geom::angle_in_arc(0.0, 10.0, 90.0));
        assert!(geom::angle_in_arc(325.0, 10.0, 90.0), "lower boundary");
        assert!(geom::angle_in_arc(55.0, 10.0, 90.0), "upper boundary");
        assert!(!geom::angle_in_arc(100.0, 10.0, 90.0));
        assert!(!geom::angle_in_arc(324.9, 10.0, 90.0));
    }

    // ---- Raycast ----

    #[test]
    fn test_raycast_hits_near_edge() {
        let walls = vec![Rect::new(100.0, -50.0, 50.0, 100.0)];
        let hit = geom::raycast(DVec2::ZERO, DVec2::new(1.0, 0.0), &walls, 2000.0);
        assert_eq!(hit.wall, Some(0));
        assert!((hit.point.x - 100.0).abs() < EPS, "near edge, not far edge");
        assert!(hit.point.y.abs() < EPS);
    }

    #[test]
    fn test_raycast_vertical_entry_edge() {
        let walls = vec![Rect::new(-50.0, 200.0, 100.0, 40.0)];
        let hit = geom::raycast(DVec2::ZERO, DVec2::new(0.0, 1.0), &walls, 2000.0);
        assert_eq!(hit.wall, Some(0));
        assert!((hit.point.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_raycast_diagonal() {
        // 45-degree ray into a wall whose left edge is at x=100: entry at
        // (100, 100), parametric distance 100*sqrt(2).
        let walls = vec![Rect::new(100.0, 50.0, 50.0, 100.0)];
        let hit = geom::raycast(DVec2::ZERO, DVec2::new(1.0, 1.0), &walls, 2000.0);
        assert_eq!(hit.wall, Some(0));
        assert!((hit.point.x - 100.0).abs() < 1e-9);
        assert!((hit.point.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_raycast_unobstructed_far_field() {
        let hit = geom::raycast(DVec2::new(5.0, 5.0), DVec2::new(3.0, 4.0), &[], 2000.0);
        assert_eq!(hit.wall, None);
        let dist = hit.point.distance(DVec2::new(5.0, 5.0));
        assert!(
            (dist - 2000.0).abs() < 1e-6,
            "far field at exactly max_distance, got {dist}"
        );
    }

    #[test]
    fn test_raycast_wall_behind_is_ignored() {
        let walls = vec![Rect::new(-200.0, -50.0, 50.0, 100.0)];
        let hit = geom::raycast(DVec2::ZERO, DVec2::new(1.0, 0.0), &walls, 2000.0);
        assert_eq!(hit.wall, None);
        assert!((hit.point.x - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_raycast_zero_direction_degenerate() {
        let walls = vec![Rect::new(100.0, -50.0, 50.0, 100.0)];
        let hit = geom::raycast(DVec2::new(7.0, 3.0), DVec2::ZERO, &walls, 2000.0);
        assert_eq!(hit.wall, None);
        assert_eq!(hit.point, DVec2::new(7.0, 3.0));
    }

    #[test]
    fn test_raycast_picks_nearest_of_two() {
        let walls = vec![
            Rect::new(300.0, -50.0, 50.0, 100.0),
            Rect::new(100.0, -50.0, 50.0, 100.0),
        ];
        let hit = geom::raycast(DVec2::ZERO, DVec2::new(1.0, 0.0), &walls, 2000.0);
        assert_eq!(hit.wall, Some(1));
        assert!((hit.point.x - 100.0).abs() < EPS);
    }

    // ---- Reflection ----

    #[test]
    fn test_reflect_zero_offset_reverses() {
        // Textbook check from the vulnerable-arc derivation:
        // v=(1,0), n=(-1,0), r = v - 2(v.n)n = (-1,0).
        let r = geom::reflect(DVec2::new(1.0, 0.0), 0.0);
        assert!((r.x + 1.0).abs() < 1e-12);
        assert!(r.y.abs() < 1e-12);
    }

    #[test]
    fn test_reflect_preserves_magnitude() {
        let r = geom::reflect(DVec2::new(100.0, 0.0), 0.0);
        assert!((r.x + 100.0).abs() < 1e-9);
        assert!(r.y.abs() < 1e-9);
    }

    #[test]
    fn test_reflect_applies_offset() {
        // Reversed beam rotated by +90 degrees: (-100,0) -> (0,-100).
        let r = geom::reflect(DVec2::new(100.0, 0.0), 90.0);
        assert!(r.x.abs() < 1e-9);
        assert!((r.y + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflect_zero_vector_is_zero() {
        assert_eq!(geom::reflect(DVec2::ZERO, 45.0), DVec2::ZERO);
    }

    // ---- Rect ----

    #[test]
    fn test_rect_from_center_and_overlap() {
        let a = Rect::from_center(DVec2::new(0.0, 0.0), 40.0, 40.0);
        assert!((a.left() + 20.0).abs() < EPS);
        assert!((a.center().x).abs() < EPS);

        let b = Rect::from_center(DVec2::new(30.0, 0.0), 40.0, 40.0);
        assert!(a.overlaps(&b));
        let c = Rect::from_center(DVec2::new(100.0, 0.0), 40.0, 40.0);
        assert!(!a.overlaps(&c));
        // Touching edges do not overlap.
        let d = Rect::from_center(DVec2::new(40.0, 0.0), 40.0, 40.0);
        assert!(!a.overlaps(&d));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetMoveInput { x: 1.0, y: -1.0 },
            PlayerCommand::SetReflectorTarget { x: 512.0, y: 300.0 },
            PlayerCommand::RotateOffset { clockwise: true },
            PlayerCommand::BeginAim,
            PlayerCommand::ReleaseFire,
            PlayerCommand::StartRun,
            PlayerCommand::ResetRun,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveStarted { wave: 2 },
            GameEvent::BeamFired {
                reached_reflector: false,
            },
            GameEvent::EnemyDestroyed {
                position: DVec2::new(10.0, 20.0),
                wave: 3,
            },
            GameEvent::PlayerHit {
                health_remaining: 1,
            },
            GameEvent::Defeat,
            GameEvent::Victory,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_enemy_phase_serde() {
        let phases = vec![
            EnemyPhase::Idle,
            EnemyPhase::Moving {
                heading_deg: 42.0,
                vulnerable_deg: 222.0,
            },
            EnemyPhase::Dying { elapsed_secs: 0.25 },
        ];
        for phase in &phases {
            let json = serde_json::to_string(phase).unwrap();
            let back: EnemyPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(*phase, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let phases = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Defeat,
            GamePhase::Victory,
        ];
        for phase in phases {
            let json = serde_json::to_string(&phase).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot {
            phase: GamePhase::Active,
            enemies: vec![EnemyView {
                id: 7,
                position: DVec2::new(100.0, 200.0),
                wave: 1,
                phase: EnemyPhase::Moving {
                    heading_deg: 0.0,
                    vulnerable_deg: 180.0,
                },
            }],
            beam: Some(BeamView {
                origin: DVec2::ZERO,
                first_leg_end: DVec2::new(100.0, 0.0),
                second_leg_end: None,
                reached_reflector: false,
                age_secs: 0.1,
            }),
            walls: vec![Rect::new(0.0, 0.0, WORLD_WIDTH, WALL_THICKNESS)],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
        assert_eq!(back.enemies.len(), 1);
        assert_eq!(back.player.mode, PlayerMode::Maneuvering);
    }
}
