pub mod emblem;
pub mod form;
pub mod handlers;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::app::{AppConfig, Controller, ShortcutConfig};
use crate::shortener::ShortenClient;

pub fn build_ui<C: ShortenClient>(
    app: &adw::Application,
    config: &AppConfig,
    client: Arc<C>,
    runtime: &Handle,
) {
    let controller = Rc::new(RefCell::new(Controller::new(client, config)));
    let shortcuts = ShortcutConfig::default();

    let emblem = emblem::create_emblem(config);
    let form = form::create_form(&shortcuts);

    let body = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .margin_top(20)
        .margin_bottom(20)
        .margin_start(10)
        .margin_end(20)
        .build();
    body.append(&emblem);
    body.append(&form.form_box);

    let header_bar = adw::HeaderBar::new();

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header_bar);
    content.append(&body);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Link Shortener")
        .icon_name(config.icon_name.as_str())
        .content(&content)
        .default_width(config.window_width)
        .default_height(config.window_height)
        .resizable(false)
        .build();

    form::render(&form, controller.borrow().state());

    let components = handlers::UiComponents {
        window: window.clone(),
        form,
    };

    handlers::connect_all_handlers(&controller, &components, &shortcuts, runtime);

    window.present();
}
