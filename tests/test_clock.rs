use std::time::Duration;

use space_invaders::Clock;

#[test]
fn period_is_inverse_fps() {
    assert_eq!(Clock::new(50).period(), Duration::from_millis(20));
    assert_eq!(Clock::new(100).period(), Duration::from_millis(10));
}

#[test]
fn zero_fps_is_clamped() {
    assert_eq!(Clock::new(0).period(), Duration::from_secs(1));
}

#[test]
fn runs_until_handle_cancelled() {
    let clock = Clock::new(200);
    let handle = clock.handle();

    let mut ticks = 0u32;
    clock
        .run(|| -> Result<(), std::io::Error> {
            ticks += 1;
            if ticks == 3 {
                handle.cancel();
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(ticks, 3);
    assert!(handle.is_cancelled());
}

#[test]
fn cancelled_before_run_never_ticks() {
    let clock = Clock::new(200);
    clock.handle().cancel();

    let mut ticks = 0u32;
    clock
        .run(|| -> Result<(), std::io::Error> {
            ticks += 1;
            Ok(())
        })
        .unwrap();

    assert_eq!(ticks, 0);
}

#[test]
fn body_error_stops_the_loop() {
    let clock = Clock::new(200);

    let mut ticks = 0u32;
    let result = clock.run(|| -> Result<(), String> {
        ticks += 1;
        Err("boom".to_string())
    });

    assert_eq!(ticks, 1);
    assert_eq!(result, Err("boom".to_string()));
}
