use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

/// Pins the window to the desktop background layer, covering the whole output.
pub fn init_overlay(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Background);
    window.set_namespace(Some("gyre"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(KeyboardMode::None);
}
