//! Unit tests for zt-agent.

use zt_core::{AgentId, Direction, Position, SimRng};

use crate::{Agent, MovementPolicy, Species, SpeciesPolicy, WorldView};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn human(id: u32, x: i32, y: i32) -> Agent {
    Agent::new(AgentId(id), Species::Human, Position::new(x, y))
}

fn zombie(id: u32, x: i32, y: i32) -> Agent {
    Agent::new(AgentId(id), Species::Zombie, Position::new(x, y))
}

// ── Species ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod species_tests {
    use super::*;
    use crate::Paces;

    #[test]
    fn compatibility_table() {
        assert!(Species::Human.will_share(Species::Human));
        assert!(Species::Human.will_share(Species::Zombie));
        assert!(Species::Zombie.will_share(Species::Human));
        assert!(!Species::Zombie.will_share(Species::Zombie));
    }

    #[test]
    fn only_mixed_contact_converts() {
        assert!(Species::Human.converts_on_contact(Species::Zombie));
        assert!(Species::Zombie.converts_on_contact(Species::Human));
        assert!(!Species::Human.converts_on_contact(Species::Human));
        assert!(!Species::Zombie.converts_on_contact(Species::Zombie));
    }

    #[test]
    fn paces_dispatch() {
        let paces = Paces::new(3, 1);
        assert_eq!(paces.of(Species::Human), 3);
        assert_eq!(paces.of(Species::Zombie), 1);
        assert_eq!(Paces::default(), Paces::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Species::Human.to_string(), "human");
        assert_eq!(Species::Zombie.to_string(), "zombie");
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use super::*;

    #[test]
    fn new_agent_has_matching_previous_position() {
        let a = human(0, 2, 3);
        assert_eq!(a.position, Position::new(2, 3));
        assert_eq!(a.previous_position, a.position);
        assert!(a.is_human());
        assert!(!a.is_zombie());
    }

    #[test]
    fn revert_restores_previous_position() {
        let mut a = zombie(0, 5, 5);
        a.position = Position::new(-1, 5);
        a.revert();
        assert_eq!(a.position, Position::new(5, 5));
    }
}

// ── WorldView ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_tests {
    use super::*;

    #[test]
    fn nearest_human_by_euclidean_distance() {
        let agents = vec![
            human(0, 12, 10), // 2.0
            human(1, 10, 15), // 5.0
            human(2, 8, 8),   // ~2.83
        ];
        let world = WorldView::new(&agents);
        let nearest = world.nearest_human(Position::new(10, 10)).unwrap();
        assert_eq!(nearest.id, AgentId(0));
    }

    #[test]
    fn nearest_human_ignores_zombies() {
        let agents = vec![zombie(0, 10, 11), human(1, 10, 20)];
        let world = WorldView::new(&agents);
        let nearest = world.nearest_human(Position::new(10, 10)).unwrap();
        assert_eq!(nearest.id, AgentId(1));
    }

    #[test]
    fn equidistant_humans_first_in_registry_wins() {
        let agents = vec![human(4, 10, 13), human(2, 13, 10), human(9, 7, 10)];
        let world = WorldView::new(&agents);
        let nearest = world.nearest_human(Position::new(10, 10)).unwrap();
        assert_eq!(nearest.id, AgentId(4));
    }

    #[test]
    fn no_humans_is_none() {
        let agents = vec![zombie(0, 1, 1)];
        assert!(WorldView::new(&agents).nearest_human(Position::new(0, 0)).is_none());
        assert!(WorldView::new(&[]).nearest_human(Position::new(0, 0)).is_none());
    }
}

// ── Policies ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;
    use crate::ForcedDirection;
    use crate::policy::pursue;

    fn zombie_direction_towards(target: (i32, i32)) -> Direction {
        let z = zombie(0, 10, 10);
        let agents = vec![z.clone(), human(1, target.0, target.1)];
        let mut rng = SimRng::new(0);
        SpeciesPolicy.choose(&z, &WorldView::new(&agents), &mut rng)
    }

    #[test]
    fn zombie_moves_along_larger_axis() {
        assert_eq!(zombie_direction_towards((12, 8)), Direction::E); // tie → horizontal
        assert_eq!(zombie_direction_towards((8, 8)), Direction::W);
        assert_eq!(zombie_direction_towards((10, 8)), Direction::N);
        assert_eq!(zombie_direction_towards((10, 12)), Direction::S);
        assert_eq!(zombie_direction_towards((13, 11)), Direction::E);
        assert_eq!(zombie_direction_towards((11, 5)), Direction::N);
    }

    #[test]
    fn zombie_step_lands_one_pace_closer() {
        let cases = [
            ((12, 10), Position::new(11, 10)),
            ((8, 10), Position::new(9, 10)),
            ((10, 8), Position::new(10, 9)),
            ((10, 12), Position::new(10, 11)),
        ];
        for (target, expected) in cases {
            let dir = zombie_direction_towards(target);
            assert_eq!(Position::new(10, 10).step(dir, 1), expected, "target {target:?}");
        }
    }

    #[test]
    fn zombie_never_steps_diagonally_towards_a_human() {
        for x in 0..20 {
            for y in 0..20 {
                if (x, y) == (10, 10) {
                    continue;
                }
                assert!(zombie_direction_towards((x, y)).is_cardinal(), "target ({x}, {y})");
            }
        }
    }

    #[test]
    fn zombie_without_humans_still_moves() {
        let z = zombie(0, 10, 10);
        let agents = vec![z.clone(), zombie(1, 3, 3)];
        let mut rng = SimRng::new(3);
        let dir = SpeciesPolicy.choose(&z, &WorldView::new(&agents), &mut rng);
        assert!(Direction::ALL.contains(&dir));
    }

    #[test]
    fn human_choice_is_random_but_seeded() {
        let h = human(0, 10, 10);
        let agents = vec![h.clone()];
        let world = WorldView::new(&agents);

        let draw = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50).map(|_| SpeciesPolicy.choose(&h, &world, &mut rng)).collect::<Vec<_>>()
        };
        let a = draw(11);
        assert_eq!(a, draw(11));
        assert!(a.iter().any(|d| !d.is_cardinal()), "humans may step diagonally");
    }

    #[test]
    fn human_ignores_nearby_zombies() {
        // Same seed, with and without a zombie next door: identical choices.
        let h = human(0, 10, 10);
        let alone = vec![h.clone()];
        let crowded = vec![h.clone(), zombie(1, 11, 10)];
        let mut r1 = SimRng::new(5);
        let mut r2 = SimRng::new(5);
        for _ in 0..20 {
            assert_eq!(
                SpeciesPolicy.choose(&h, &WorldView::new(&alone), &mut r1),
                SpeciesPolicy.choose(&h, &WorldView::new(&crowded), &mut r2),
            );
        }
    }

    #[test]
    fn forced_direction_overrides_species() {
        let agents = vec![human(0, 10, 10), zombie(1, 0, 0)];
        let world = WorldView::new(&agents);
        let mut rng = SimRng::new(0);
        let policy = ForcedDirection(Direction::NE);
        for a in &agents {
            assert_eq!(policy.choose(a, &world, &mut rng), Direction::NE);
        }
    }

    #[test]
    fn pursue_on_same_cell_goes_west() {
        assert_eq!(pursue(Position::new(4, 4), Position::new(4, 4)), Direction::W);
    }

    #[test]
    fn policy_is_object_safe_via_box() {
        let policy: Box<dyn MovementPolicy> = Box::new(SpeciesPolicy);
        let z = zombie(0, 0, 0);
        let agents = vec![z.clone(), human(1, 0, 5)];
        let mut rng = SimRng::new(0);
        assert_eq!(policy.choose(&z, &WorldView::new(&agents), &mut rng), Direction::S);
    }
}
