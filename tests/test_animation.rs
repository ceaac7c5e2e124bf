use outpost::animation::{Animation, SheetInfo, NOMINAL_FRAME_WIDTH};

/// A strip of `frames` 128x128 frames.
fn strip(frames: u32, frame_speed: f32) -> Animation {
    Animation::new(
        SheetInfo::new(frames as f32 * 128.0, 128.0),
        NOMINAL_FRAME_WIDTH,
        frame_speed,
    )
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_computes_frame_geometry() {
    let a = strip(7, 0.2);
    assert_eq!(a.frames, 7);
    assert_eq!(a.frame_rec.x, 0.0);
    assert_eq!(a.frame_rec.w, 128.0);
    assert_eq!(a.frame_rec.h, 128.0);
    assert_eq!(a.current_frame, 0);
}

#[test]
fn narrow_sheet_clamps_to_one_frame() {
    // A sheet narrower than the nominal frame width still yields one frame,
    // never zero.
    let a = Animation::new(SheetInfo::new(64.0, 64.0), NOMINAL_FRAME_WIDTH, 1.0);
    assert_eq!(a.frames, 1);
    assert_eq!(a.frame_rec.w, 64.0);
}

// ── Advancing ─────────────────────────────────────────────────────────────────

#[test]
fn speed_point_two_advances_every_fifth_tick() {
    let mut a = strip(7, 0.2);
    for _ in 0..4 {
        a.advance();
        assert_eq!(a.current_frame, 0);
    }
    a.advance();
    assert_eq!(a.current_frame, 1);
    assert_eq!(a.frame_rec.x, 128.0);
}

#[test]
fn index_stays_in_range_forever() {
    let mut a = strip(5, 0.3);
    for _ in 0..1000 {
        a.advance();
        assert!(a.current_frame >= 0 && a.current_frame < a.frames);
        assert!(a.frame_counter < 1.0);
    }
}

#[test]
fn wrap_reported_only_on_wrap() {
    let mut a = strip(3, 1.0); // one frame per tick
    assert!(!a.advance()); // -> 1
    assert!(!a.advance()); // -> 2
    assert!(a.advance()); // -> 0, wrapped
    assert_eq!(a.current_frame, 0);
    assert!(!a.advance()); // -> 1
}

#[test]
fn zero_speed_freezes_without_looping() {
    let mut a = strip(4, 0.0);
    for _ in 0..100 {
        assert!(!a.advance());
    }
    assert_eq!(a.current_frame, 0);
    assert_eq!(a.frame_counter, 0.0);
}

// ── Reset / resize / retarget ────────────────────────────────────────────────

#[test]
fn reset_rewinds_to_frame_zero() {
    let mut a = strip(3, 1.0);
    a.advance();
    a.advance();
    assert_eq!(a.current_frame, 2);
    a.reset();
    assert_eq!(a.current_frame, 0);
    assert_eq!(a.frame_counter, 0.0);
    assert_eq!(a.frame_rec.x, 0.0);
}

#[test]
fn resize_recomputes_rectangle_from_sheet() {
    let mut a = strip(4, 1.0);
    a.advance(); // frame 1
    a.frame_rec.w = 1.0; // simulate stale geometry after a selection switch
    a.frame_rec.h = 1.0;
    a.resize();
    assert_eq!(a.frame_rec.w, 128.0);
    assert_eq!(a.frame_rec.h, 128.0);
    assert_eq!(a.frame_rec.x, 128.0);
}

#[test]
fn retarget_switches_sheet_and_clamps_index() {
    let mut a = strip(7, 1.0);
    for _ in 0..5 {
        a.advance();
    }
    assert_eq!(a.current_frame, 5);

    let sheet = SheetInfo::new(512.0, 128.0);
    a.retarget(sheet, NOMINAL_FRAME_WIDTH);
    assert_eq!(a.sheet(), sheet);
    assert_eq!(a.frames, 4);
    assert_eq!(a.current_frame, 0); // 5 is out of range for 4 frames
    assert_eq!(a.frame_rec.w, 128.0);
    assert_eq!(a.frame_rec.x, 0.0);
}

#[test]
fn retarget_keeps_index_when_in_range() {
    let mut a = strip(7, 1.0);
    a.advance();
    a.advance(); // frame 2
    a.retarget(SheetInfo::new(512.0, 128.0), NOMINAL_FRAME_WIDTH);
    assert_eq!(a.current_frame, 2);
    assert_eq!(a.frame_rec.x, 256.0);
}
