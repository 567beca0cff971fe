use loopstrip::{CarouselConfig, CarouselEngine, Elevation, EngineUpdate, Item};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn items(n: u64) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: i,
            image_ref: format!("img/{i}.jpg"),
            alt_text: format!("item {i}"),
        })
        .collect()
}

fn engine(viewport: f64) -> CarouselEngine {
    CarouselEngine::new(&items(5), CarouselConfig::default(), viewport, 0).unwrap()
}

fn settle(eng: &mut CarouselEngine) {
    let mut update = eng.transition_finished();
    while update.wants_frame_ticks {
        update = eng.frame_tick();
    }
}

#[test]
fn five_cycles_loop_back_to_the_first_item() {
    init_tracing();
    let mut eng = engine(1200.0);
    let mut visited = vec![eng.center_item_index().unwrap()];

    let mut now = 0u64;
    for _ in 0..5 {
        now += 4000;
        assert!(eng.poll(now).needs_render);
        settle(&mut eng);
        visited.push(eng.center_item_index().unwrap());
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4, 0]);
    assert_eq!(eng.center(), 5);
    assert!(eng.is_settled());
}

#[test]
fn settle_invariant_holds_for_long_runs() {
    init_tracing();
    for n in 1..=6u64 {
        let mut eng = CarouselEngine::new(&items(n), CarouselConfig::default(), 1024.0, 0).unwrap();
        let mut now = 0u64;
        for _ in 0..(4 * n + 3) {
            now += 4000;
            assert!(eng.poll(now).needs_render);
            settle(&mut eng);
            let c = eng.center();
            let n = n as usize;
            assert!((n..2 * n).contains(&c), "n={n} center={c}");
        }
    }
}

#[test]
fn pause_mid_flight_lets_the_transition_finish() {
    init_tracing();
    let mut eng = engine(1200.0);

    assert!(eng.poll(4000).needs_render);
    assert!(eng.is_animating());
    eng.pointer_enter();

    // The in-flight transition still completes.
    settle(&mut eng);
    assert_eq!(eng.center(), 6);
    assert!(eng.is_settled());

    // Only the next scheduled advance is suppressed.
    assert!(!eng.poll(8000).needs_render);
    assert_eq!(eng.center(), 6);

    eng.pointer_leave();
    assert!(eng.poll(12_000).needs_render);
    assert_eq!(eng.center(), 7);
}

#[test]
fn resume_keeps_the_original_fire_phase() {
    init_tracing();
    let mut eng = engine(1200.0);
    eng.pointer_enter();
    assert!(!eng.poll(4000).needs_render);
    eng.pointer_leave();
    // Not due again until the next multiple of the interval.
    assert!(!eng.poll(7999).needs_render);
    assert!(eng.poll(8000).needs_render);
}

#[test]
fn idle_resize_recomputes_layout_immediately() {
    init_tracing();
    let mut eng = engine(1200.0);
    let desktop = eng.frames();
    assert_eq!(desktop[5].width, 224.0);
    assert_eq!(desktop[6].height, 360.0);

    // Desktop to mobile without any advance in between.
    assert!(eng.resize(400.0).needs_render);
    let mobile = eng.frames();
    assert_eq!(mobile[5].width, 320.0);
    assert_eq!(mobile[5].height, 420.0);
    assert_eq!(mobile[6].height, 340.0);
    assert_eq!(mobile[7].height, 320.0);
}

#[test]
fn wrap_settle_disables_transitions_for_exactly_two_ticks() {
    init_tracing();
    let mut eng = engine(1200.0);
    let mut now = 0u64;
    for _ in 0..4 {
        now += 4000;
        eng.poll(now);
        settle(&mut eng);
    }
    assert_eq!(eng.center(), 9);

    now += 4000;
    eng.poll(now);
    let update = eng.transition_finished();
    assert!(update.wants_frame_ticks);
    assert_eq!(eng.center(), 5);
    assert!(!eng.frames()[5].transitions_enabled);

    let update = eng.frame_tick();
    assert!(update.wants_frame_ticks);
    assert!(!eng.frames()[5].transitions_enabled);

    let update = eng.frame_tick();
    assert_eq!(
        update,
        EngineUpdate {
            needs_render: true,
            wants_frame_ticks: false
        }
    );
    assert!(eng.frames()[5].transitions_enabled);
    assert!(eng.is_settled());
}

#[test]
fn centered_slot_is_the_only_raised_one_through_a_full_loop() {
    init_tracing();
    let mut eng = engine(1500.0);
    let mut now = 0u64;
    for _ in 0..7 {
        now += 4000;
        eng.poll(now);
        settle(&mut eng);
        let frames = eng.frames();
        let raised: Vec<usize> = frames
            .iter()
            .filter(|f| f.elevation == Elevation::Raised)
            .map(|f| f.slot)
            .collect();
        assert_eq!(raised, vec![eng.center()]);
        assert_eq!(frames[eng.center()].width, 284.0);
    }
}
