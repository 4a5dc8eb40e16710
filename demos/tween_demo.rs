//! Drives a few immediate-mode tweens through a simulated 60 Hz frame loop.
//!
//! Run with `RUST_LOG=debug` to see tweens being created and deleted.

use std::time::Duration;

use glam::Vec2;
use myth_tween::{Ease, Timer, Transition, TweenOptions, TweenRegistry, ValueSlots};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut registry = TweenRegistry::new();
    let mut slots = ValueSlots::new();
    let mut timer = Timer::new();

    let alpha = slots.insert(0.0);
    let position = slots.insert_vec2(Vec2::new(-100.0, 0.0));

    let fade = TweenOptions::new(Ease::Sine, Transition::Forward, Duration::from_millis(500));
    let slide = TweenOptions::new(Ease::Back, Transition::Backward, Duration::from_secs(1))
        .with_delay(Duration::from_millis(250))
        .with_snap_to_end(true);

    let mut bounced = false;
    for frame in 0..240 {
        timer.advance(Duration::from_micros(16_667));
        let dt = timer.dt_seconds();

        registry.advance_here(dt, &mut slots, alpha, 1.0, Some(&fade))?;
        let (arrived, tween) =
            registry.advance_vec2("slide", dt, &mut slots, position, Vec2::ZERO, Some(&slide))?;

        if arrived {
            if bounced {
                registry.delete("slide");
                break;
            }
            // Play the slide back to where it started
            tween.reverse();
            tween.reset();
            bounced = true;
        }

        if frame % 15 == 0 {
            let pos = slots.read_vec2(position).unwrap_or_default();
            println!(
                "frame {frame:3}  alpha {:.3}  position ({:7.2}, {:5.2})",
                slots.get(alpha).unwrap_or_default(),
                pos.x,
                pos.y
            );
        }
    }

    println!("{} tween(s) still registered", registry.len());
    Ok(())
}
