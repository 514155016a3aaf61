use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::debug;

use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::runtime::Handle;

use crate::app::{task_outcome, Action, Controller, ShortcutConfig};
use crate::clipboard::ClipboardManager;
use crate::shortener::ShortenClient;
use crate::ui::form::{render, FormComponents};

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub form: FormComponents,
}

/// Shared handle to the controller; only touched from the GTK main thread.
pub type SharedController<C> = Rc<RefCell<Controller<C>>>;

/// Read the entry, start a request if the input is valid, and apply the
/// result once it comes back.
pub fn submit<C: ShortenClient>(
    controller: &SharedController<C>,
    form: &FormComponents,
    runtime: &Handle,
) {
    let raw = form.url_entry.text();
    let request = controller.borrow_mut().submit(raw.as_str());
    render(form, controller.borrow().state());

    let Some(request) = request else {
        return;
    };

    let task = runtime.spawn(request);
    let controller = controller.clone();
    let form = form.clone();
    glib::spawn_future_local(async move {
        let event = task_outcome(task.await);
        controller.borrow_mut().complete(event);
        render(&form, controller.borrow().state());
    });
}

pub fn copy<C: ShortenClient>(
    controller: &SharedController<C>,
    form: &FormComponents,
    window: &adw::ApplicationWindow,
) {
    let clipboard = ClipboardManager::from_widget(window);
    controller.borrow_mut().copy_result(&clipboard);
    render(form, controller.borrow().state());
}

pub fn connect_submit_handlers<C: ShortenClient>(
    controller: &SharedController<C>,
    components: &UiComponents,
    runtime: &Handle,
) {
    components.form.shorten_btn.connect_clicked({
        let controller = controller.clone();
        let form = components.form.clone();
        let runtime = runtime.clone();
        move |_| submit(&controller, &form, &runtime)
    });

    // Enter in the entry
    components.form.url_entry.connect_activate({
        let controller = controller.clone();
        let form = components.form.clone();
        let runtime = runtime.clone();
        move |_| submit(&controller, &form, &runtime)
    });
}

pub fn connect_copy_handler<C: ShortenClient>(
    controller: &SharedController<C>,
    components: &UiComponents,
) {
    components.form.copy_btn.connect_clicked({
        let controller = controller.clone();
        let form = components.form.clone();
        let window = components.window.clone();
        move |_| copy(&controller, &form, &window)
    });
}

pub fn connect_shortcuts<C: ShortenClient>(
    controller: &SharedController<C>,
    components: &UiComponents,
    shortcuts: &ShortcutConfig,
    runtime: &Handle,
) {
    let key_controller = gtk::EventControllerKey::new();

    key_controller.connect_key_pressed({
        let controller = controller.clone();
        let form = components.form.clone();
        let window = components.window.clone();
        let shortcuts = shortcuts.clone();
        let runtime = runtime.clone();
        move |_, key, _, modifiers| {
            let Some(action) = shortcuts.get_action(key, modifiers) else {
                return glib::Propagation::Proceed;
            };
            debug!("Shortcut: {}", action.label());

            match action {
                Action::Submit => {
                    if form.shorten_btn.is_sensitive() {
                        submit(&controller, &form, &runtime);
                    }
                }
                Action::Copy => copy(&controller, &form, &window),
                Action::Quit => window.close(),
            }
            glib::Propagation::Stop
        }
    });

    components.window.add_controller(key_controller);
}

pub fn connect_all_handlers<C: ShortenClient>(
    controller: &SharedController<C>,
    components: &UiComponents,
    shortcuts: &ShortcutConfig,
    runtime: &Handle,
) {
    debug!("Initializing UI handlers");
    connect_submit_handlers(controller, components, runtime);
    connect_copy_handler(controller, components);
    connect_shortcuts(controller, components, shortcuts, runtime);
}
