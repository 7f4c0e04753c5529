//! Headless clock studio.
//!
//! Attaches a clock view to a redraw scheduler, renders frames into a
//! `DrawList` at the configured cadence, then detaches. Set `RUST_LOG=debug`
//! to see per-frame summaries.

mod config;

use anyhow::{Context, Result};
use horologe_engine::logging::{LoggingConfig, init_logging};
use horologe_engine::scene::{DrawCmd, DrawList};
use horologe_engine::schedule::Scheduler;
use horologe_engine::text::{FontId, FontSystem};
use horologe_face::{ClockView, Painter};

use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env().context("invalid studio configuration")?;
    log::info!(
        "horologe studio: {} face, {}x{}, {} frames every {:?}",
        config.variant,
        config.viewport.width,
        config.viewport.height,
        config.frames,
        config.interval,
    );

    let mut fonts = FontSystem::new();
    let font = match &config.font_path {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read font {}", path.display()))?;
            fonts
                .load_font(&bytes)
                .with_context(|| format!("failed to parse font {}", path.display()))?
        }
        None => {
            log::warn!("HOROLOGE_FONT not set; numerals use estimated metrics");
            FontId::from_index(0)
        }
    };

    let mut scheduler = Scheduler::new();
    let mut view = ClockView::local(config.variant.style(font)).with_interval(config.interval);
    let mut list = DrawList::new();

    view.attach(&mut scheduler);

    let mut frames = 0;
    while frames < config.frames {
        if let Some(wait) = scheduler.time_until_next() {
            std::thread::sleep(wait);
        }
        scheduler.run_due();

        if view.take_redraw() {
            list.clear();
            view.draw(&mut Painter::new(&mut list, &fonts), config.viewport);
            present(&mut list, frames);
            frames += 1;
        }
    }

    view.detach(&mut scheduler);
    log::info!(
        "rendered {frames} frames over {} ticks; {} tasks left scheduled",
        view.ticks(),
        scheduler.len(),
    );

    Ok(())
}

/// Stand-in for a host surface: summarizes the frame in paint order.
fn present(list: &mut DrawList, frame: u64) {
    let (mut lines, mut circles, mut texts) = (0, 0, 0);
    let mut second_tip = None;

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Line(l) => {
                lines += 1;
                second_tip = Some(l.end);
            }
            DrawCmd::Circle(_) => circles += 1,
            DrawCmd::Text(_) => texts += 1,
        }
    }

    log::debug!(
        "frame {frame}: {lines} lines, {circles} circles, {texts} labels, second hand at {second_tip:?}"
    );
}
