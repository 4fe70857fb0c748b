#[cfg(feature = "gtk4-adapter")]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gtk4 as gtk;
    use gtk4::prelude::*;

    use vase_rs::api::{VaseEngine, VaseEngineConfig};
    use vase_rs::render::CairoRenderer;

    let app = gtk::Application::builder()
        .application_id("rs.vase.examples.buttons")
        .build();

    app.connect_activate(|app| {
        let config = VaseEngineConfig::default();
        let width = config.viewport.width;
        let height = config.viewport.height;

        let renderer = match CairoRenderer::new(width as i32, height as i32) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to create cairo renderer: {err}");
                return;
            }
        };
        let engine = match VaseEngine::new(renderer, config) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("failed to initialize engine: {err}");
                return;
            }
        };

        let adapter = Rc::new(RefCell::new(
            vase_rs::platform_gtk::GtkVaseAdapter::new(engine),
        ));

        let drawing_area = gtk::DrawingArea::builder()
            .content_width(width as i32)
            .content_height(height as i32)
            .build();
        {
            let adapter = Rc::clone(&adapter);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Err(err) = adapter.borrow_mut().draw(context) {
                    eprintln!("draw failed: {err}");
                }
            });
        }
        {
            let adapter = Rc::clone(&adapter);
            drawing_area.add_tick_callback(move |area, frame_clock| {
                let now_ms = frame_clock.frame_time() as f64 / 1000.0;
                adapter.borrow_mut().on_tick(now_ms);
                area.queue_draw();
                gtk::glib::ControlFlow::Continue
            });
        }

        let increase_button = gtk::Button::with_label("Increase");
        let decrease_button = gtk::Button::with_label("Decrease");
        for (button, control_id) in [(&increase_button, "increase"), (&decrease_button, "decrease")]
        {
            let adapter = Rc::clone(&adapter);
            let area = drawing_area.clone();
            let control_id = control_id.to_owned();
            button.connect_clicked(move |_| {
                adapter.borrow_mut().activate_control(&control_id);
                area.queue_draw();
            });
        }

        let button_row = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        button_row.set_halign(gtk::Align::Center);
        button_row.append(&increase_button);
        button_row.append(&decrease_button);

        let column = gtk::Box::new(gtk::Orientation::Vertical, 12);
        column.append(&drawing_area);
        column.append(&button_row);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("vase-rs | animated vases")
            .default_width(width as i32)
            .default_height(height as i32 + 60)
            .build();
        window.set_child(Some(&column));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_vase_buttons");
}
