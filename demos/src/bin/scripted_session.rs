// Copyright 2026 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted editing session.
//!
//! Build a small scene, transform objects and the window, and print every
//! frame as it would be handed to a renderer.
//!
//! Run:
//! - `cargo run -p planar_demos --bin scripted_session`
//! - `RUST_LOG=debug cargo run -p planar_demos --bin scripted_session -- --zoom 3`

use anyhow::Context;
use clap::Parser;
use kurbo::Size;
use log::info;
use planar_scene::{Frame, RenderGeometry, Session, SessionConfig, Target, TransformRequest};
use planar_transform::{Point, Primitive};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Inset of the initial window and viewport.
    #[arg(short, long, default_value_t = 50.0)]
    padding: f64,
    /// Window zoom factor applied in the third step.
    #[arg(short, long, default_value_t = 2.0)]
    zoom: f64,
    /// Window rotation in degrees applied in the last step.
    #[arg(short, long, default_value_t = 30.0)]
    rotate: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("starting session with {cli:?}");

    let mut session = Session::new(SessionConfig {
        canvas: Size::new(cli.width, cli.height),
        padding: cli.padding,
    });

    let scene = session.scene_mut();
    let line = scene.add_line(None, Point::new(100.0, 100.0), Point::new(600.0, 400.0));
    let triangle = scene.add_polygon(
        Some("Triangle"),
        vec![
            Point::new(200.0, 200.0),
            Point::new(350.0, 200.0),
            Point::new(200.0, 350.0),
        ],
    )?;
    let marker = scene.add_point(Some("Marker"), Point::new(400.0, 300.0));
    scene.add_polygon(
        None,
        vec![
            Point::new(650.0, 450.0),
            Point::new(900.0, 450.0),
            Point::new(900.0, 700.0),
            Point::new(650.0, 700.0),
        ],
    )?;

    print_list(&session);
    print_frame("initial", &session.render(), &session);

    session.apply(TransformRequest::new(
        Primitive::Rotation { degrees: 45.0 },
        triangle,
    ))?;
    session.apply(TransformRequest::new(
        Primitive::Translation {
            dx: -150.0,
            dy: 0.0,
        },
        line,
    ))?;
    print_frame("objects moved", &session.render(), &session);

    session
        .apply(TransformRequest::new(
            Primitive::Scale {
                sx: cli.zoom,
                sy: cli.zoom,
            },
            Target::Window,
        ))
        .context("zooming the window")?;
    print_frame("window zoomed", &session.render(), &session);

    session.apply(TransformRequest::new(
        Primitive::Rotation {
            degrees: cli.rotate,
        },
        Target::Window,
    ))?;
    session.scene_mut().remove(marker)?;
    print_list(&session);
    print_frame("window rotated", &session.render(), &session);

    Ok(())
}

fn print_list(session: &Session) {
    println!("objects:");
    for entry in session.scene().entries() {
        let check = if entry.visible { 'x' } else { ' ' };
        println!("  [{check}] {}", entry.label);
    }
}

fn print_frame(title: &str, frame: &Frame, session: &Session) {
    println!(
        "frame '{title}': {} items, {} segments, {} points",
        frame.items.len(),
        frame.segment_count(),
        frame.point_count()
    );
    for item in &frame.items {
        let name = session
            .scene()
            .get(item.target)
            .map_or("?", |object| object.name());
        match &item.geometry {
            RenderGeometry::Point(p) => println!("  {name}: point ({:.1}, {:.1})", p.x, p.y),
            RenderGeometry::Segments(segments) => {
                println!("  {name}:");
                for s in segments {
                    println!(
                        "    ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                        s.p0.x, s.p0.y, s.p1.x, s.p1.y
                    );
                }
            }
        }
    }
}
