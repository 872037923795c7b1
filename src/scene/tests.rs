use super::*;

fn iteration(number: u32, agents: &[(i64, f32, f32)]) -> Iteration {
    Iteration {
        number,
        agents: agents.iter().map(|&(id, x, y)| Agent::new(id, x, y)).collect(),
    }
}

#[test]
fn index_returns_exact_recorded_agent() {
    let iterations = vec![
        iteration(0, &[(7, 0.0, 0.0), (9, 5.5, -2.25)]),
        iteration(1, &[(7, 1.0, 0.0)]),
    ];
    let index = IterationIndex::build(&iterations);

    let agent = index.lookup(0, 9).expect("agent 9 recorded at iteration 0");
    assert_eq!(agent.pos, Vec2::new(5.5, -2.25));
    assert_eq!(agent.id, 9);

    // The indexed value is the source value, bit for bit.
    assert_eq!(*agent, iterations[0].agents[1]);
}

#[test]
fn index_miss_is_none_not_stale() {
    let iterations = vec![
        iteration(0, &[(1, 0.0, 0.0)]),
        iteration(1, &[(1, 1.0, 0.0), (2, 9.0, 9.0)]),
    ];
    let index = IterationIndex::build(&iterations);

    // Agent 2 spawned at iteration 1; it has no entry at iteration 0.
    assert!(index.lookup(0, 2).is_none());
    // Unknown iteration number.
    assert!(index.lookup(5, 1).is_none());
    // Unknown agent id.
    assert!(index.lookup(1, 42).is_none());
}

#[test]
fn index_covers_every_observation() {
    let iterations = vec![
        iteration(0, &[(1, 0.0, 0.0), (2, 1.0, 1.0)]),
        iteration(1, &[(1, 0.5, 0.0), (2, 1.5, 1.0), (3, -1.0, 4.0)]),
        iteration(2, &[(3, -2.0, 4.0)]),
    ];
    let index = IterationIndex::build(&iterations);

    assert_eq!(index.len(), 3);
    for it in &iterations {
        for agent in &it.agents {
            assert_eq!(index.lookup(it.number, agent.id), Some(agent));
        }
    }
}

#[test]
fn area_inner_is_shrunk_by_indents() {
    let area = Area {
        x1: 10.0,
        y1: 20.0,
        x2: 50.0,
        y2: 40.0,
        horizontal_indent: 5.0,
        vertical_indent: 2.0,
    };
    let (lo, hi) = area.inner();
    assert_eq!(lo, Vec2::new(15.0, 22.0));
    assert_eq!(hi, Vec2::new(45.0, 38.0));
}

#[test]
fn oversized_indents_invert_without_panicking() {
    let area = Area {
        x1: 0.0,
        y1: 0.0,
        x2: 10.0,
        y2: 10.0,
        horizontal_indent: 8.0,
        vertical_indent: 8.0,
    };
    let (lo, hi) = area.inner();
    // Inverted: the "low" corner ends up past the "high" corner.
    assert!(lo.x > hi.x);
    assert!(lo.y > hi.y);
}

#[test]
fn last_cursor_clamps_on_empty_scene() {
    let scene = Scene::default();
    assert_eq!(scene.last_cursor(), 0);

    let scene = Scene {
        iterations: vec![iteration(0, &[]), iteration(1, &[]), iteration(2, &[])],
        ..Default::default()
    };
    assert_eq!(scene.last_cursor(), 2);
}
