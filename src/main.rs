// Wand tracing: track the reflective tip of a wand in the infrared frame
// and draw a fading trail of its path onto the aligned color frame.
//
// What you SEE:
// • Three windows: Color (crop + swatches + trail), IR (live infrared with
//   saturated markers), Mask (trail only, white on black).
// • Move the bright tip around: a trail follows it. Take it out of frame:
//   the trail drains away, oldest point first.
// • Hover the tip over one of the four boxes on the right edge of the Color
//   window to switch the trail's color. Q or ESC quits.

mod compose;
mod config;
mod detector;
mod draw;
mod error;
mod session;
mod source;
mod swatch;
mod trace;
mod types;

use std::time::{Duration, Instant};

use tracing::info;

use config::TraceConfig;
use draw::Display;
use error::Error;
use session::WandSession;
use source::{FrameSource, SyntheticWand};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let cfg = TraceConfig::default();

    /* --- Frame source ---
       No depth-camera backend is wired in here; the synthetic source stands
       in behind the same trait a real device adapter would implement. */
    let mut source = SyntheticWand::new(&cfg);
    info!("frame source ready (synthetic wand)");

    /* --- Session state ---
       Everything that persists between ticks lives in here: the trail and
       the currently selected trail color. */
    let mut session = WandSession::new(cfg.clone());

    /* --- Output windows, one per composited image --- */
    let (w, h) = (cfg.ir_width as usize, cfg.ir_height as usize);
    let mut color_win = Display::new("Color", w, h)?;
    let mut ir_win = Display::new("IR", w, h)?;
    let mut mask_win = Display::new("Mask", w, h)?;

    /* --- Tick-rate reporting, once per second --- */
    let mut last_report = Instant::now();
    let mut ticks_this_second: u32 = 0;

    /* ------------------------------ Tick loop ------------------------------ */
    while color_win.is_open()
        && ir_win.is_open()
        && mask_win.is_open()
        && !color_win.quit_pressed()
        && !ir_win.quit_pressed()
        && !mask_win.quit_pressed()
    {
        // 1) Wait for the next aligned frame pair. A failure here is fatal;
        //    there is no reconnect attempt.
        let pair = source.next_frame()?;

        // 2) One tick: detect, update the trail, composite the outputs.
        let frames = session.tick(&pair.ir, &pair.color)?;

        // 3) Present all three views.
        color_win.present_rgb(&frames.color)?;
        ir_win.present_gray_f32(&frames.ir)?;
        mask_win.present_gray(&frames.mask)?;

        ticks_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_report) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_report).as_secs_f32();
            info!(
                ticks_per_second = ticks_this_second as f32 / secs,
                trail_len = session.trace().len(),
                "running"
            );
            ticks_this_second = 0;
            last_report = now;
        }
    }

    source.shutdown()?;
    info!("stopped");
    Ok(())
}
