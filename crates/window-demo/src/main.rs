// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: resize drives the width observer, cursor drives hover, keys cycle the metric.

use chart_engine::{ContainerObserver, Metric, Period, RenderOptions, Sample, TrendChart};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    let opts = RenderOptions::default();
    let inset_left = opts.insets.left as f32;
    let surface_h = opts.plot_height + opts.insets.vsum() as f32;

    let chart = Rc::new(RefCell::new(TrendChart::new(Metric::Views, opts)));
    chart.borrow_mut().set_samples(synth_series(Period::Month));

    // Width pub/sub; the subscription guard lives for the whole event loop.
    let observer = ContainerObserver::new();
    let _subscription = {
        let chart = chart.clone();
        observer.subscribe(move |w| chart.borrow_mut().set_width(w))
    };

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pulse — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, surface_h as f64))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    // First measurement before any resize arrives
    observer.observe(window.inner_size().width as f32);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    observer.observe(new_size.width as f32);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // pointer x relative to the plot area's left edge
                    chart.borrow_mut().pointer_moved(position.x as f32 - inset_left);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    chart.borrow_mut().pointer_left();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        // metric switch also forces hover back to idle
                        let next = chart.borrow().metric().next();
                        chart.borrow_mut().set_metric(next);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let chart = chart.borrow();
                if !chart.is_measured() {
                    // nothing to draw until the first width observation
                    return;
                }
                let (rgba, w, h, _stride) = match chart.render_to_rgba8() {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("render error: {e}");
                        return;
                    }
                };
                surface
                    .resize(
                        NonZeroU32::new(w as u32).expect("nonzero width"),
                        NonZeroU32::new(h.max(1) as u32).expect("nonzero height"),
                    )
                    .ok();
                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    // Softbuffer expects ARGB or BGRA depending on platform; ARGB is common.
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}

/// Deterministic synthetic series for running the demo without data.
fn synth_series(period: Period) -> Vec<Sample> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    (0..period.days())
        .map(|i| {
            let wave = ((i as f64) * 0.45).sin() * 0.5 + 0.5;
            let views = (1_200.0 + wave * 4_500.0) as u64;
            let earnings = 8.0 + wave * 55.0;
            let submissions = (wave * 6.0) as u64;
            Sample::new(
                start + chrono::Days::new(i as u64),
                views,
                earnings,
                submissions,
            )
        })
        .collect()
}
