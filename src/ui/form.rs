use gtk4 as gtk;

use gtk::{Align, Orientation};
use gtk4::prelude::*;

use crate::app::{Action, FormState, ShortcutConfig, Tone};

const TONE_CLASSES: [&str; 3] = ["dim-label", "success", "error"];

#[derive(Clone)]
pub struct FormComponents {
    pub form_box: gtk::Box,
    pub url_entry: gtk::Entry,
    pub shorten_btn: gtk::Button,
    pub result_entry: gtk::Entry,
    pub copy_btn: gtk::Button,
    pub status_label: gtk::Label,
}

pub fn create_form(shortcuts: &ShortcutConfig) -> FormComponents {
    let url_label = gtk::Label::builder()
        .label("Enter URL:")
        .halign(Align::Start)
        .build();

    let url_entry = gtk::Entry::builder()
        .width_chars(15)
        .placeholder_text("example.com")
        .input_purpose(gtk::InputPurpose::Url)
        .build();

    let shorten_btn = gtk::Button::builder()
        .label("Shorten")
        .tooltip_text(shortcuts.tooltip(Action::Submit))
        .margin_top(5)
        .margin_bottom(5)
        .build();
    shorten_btn.add_css_class("suggested-action");

    let result_entry = gtk::Entry::builder()
        .width_chars(15)
        .editable(false)
        .build();

    let copy_btn = gtk::Button::builder()
        .label("Copy")
        .tooltip_text(shortcuts.tooltip(Action::Copy))
        .build();

    // A blank label would collapse and shift the layout
    let status_label = gtk::Label::builder()
        .label(" ")
        .halign(Align::Start)
        .margin_top(5)
        .build();
    status_label.add_css_class("dim-label");

    let form_box = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(3)
        .valign(Align::Center)
        .hexpand(true)
        .build();
    form_box.append(&url_label);
    form_box.append(&url_entry);
    form_box.append(&shorten_btn);
    form_box.append(&result_entry);
    form_box.append(&copy_btn);
    form_box.append(&status_label);

    FormComponents {
        form_box,
        url_entry,
        shorten_btn,
        result_entry,
        copy_btn,
        status_label,
    }
}

/// Bring the widgets in line with `state`.
pub fn render(form: &FormComponents, state: &FormState) {
    if form.result_entry.text().as_str() != state.shortened_url {
        form.result_entry.set_text(&state.shortened_url);
    }

    let message = state.status.message();
    form.status_label
        .set_label(if message.is_empty() { " " } else { message });

    for class in TONE_CLASSES {
        form.status_label.remove_css_class(class);
    }
    form.status_label.add_css_class(tone_class(state.status.tone()));

    let idle = !state.status.is_pending();
    form.shorten_btn.set_sensitive(idle);
    form.copy_btn.set_sensitive(!state.shortened_url.is_empty());
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "dim-label",
        Tone::Positive => "success",
        Tone::Negative => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_classes_are_known() {
        for tone in [Tone::Neutral, Tone::Positive, Tone::Negative] {
            assert!(TONE_CLASSES.contains(&tone_class(tone)));
        }
    }
}
