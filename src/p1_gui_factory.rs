//! Pattern 1: Abstract Factory
//! Example: Cross-Platform GUI Toolkit
//!
//! Run with: cargo run --bin p1_gui_factory

/// Base interface for a window in the GUI toolkit.
trait Window {
    fn render(&self) -> String;
}

struct WindowsWindow;

impl Window for WindowsWindow {
    fn render(&self) -> String {
        "Rendering a Windows-style window.".to_string()
    }
}

struct MacWindow;

impl Window for MacWindow {
    fn render(&self) -> String {
        "Rendering a macOS-style window.".to_string()
    }
}

/// Base interface for a button in the GUI toolkit.
trait Button {
    fn render(&self) -> String;

    // Buttons collaborate with windows (e.g., rendering inside a window).
    // The factory guarantees the window comes from the same platform.
    fn click_inside(&self, window: &dyn Window) -> String;
}

struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> String {
        "Rendering a Windows-style button.".to_string()
    }

    fn click_inside(&self, window: &dyn Window) -> String {
        format!("WindowsButton clicked inside -> ({})", window.render())
    }
}

struct MacButton;

impl Button for MacButton {
    fn render(&self) -> String {
        "Rendering a macOS-style button.".to_string()
    }

    fn click_inside(&self, window: &dyn Window) -> String {
        format!("MacButton clicked inside -> ({})", window.render())
    }
}

/// The abstract factory declares creation methods for a family
/// of GUI components that are guaranteed to be compatible.
trait GuiFactory {
    fn create_window(&self) -> Box<dyn Window>;
    fn create_button(&self) -> Box<dyn Button>;
}

struct WindowsGuiFactory;

impl GuiFactory for WindowsGuiFactory {
    fn create_window(&self) -> Box<dyn Window> {
        Box::new(WindowsWindow)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

struct MacGuiFactory;

impl GuiFactory for MacGuiFactory {
    fn create_window(&self) -> Box<dyn Window> {
        Box::new(MacWindow)
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
}

// Client code only knows about the abstract traits.
fn run_gui(factory: &dyn GuiFactory) {
    let window = factory.create_window();
    let button = factory.create_button();

    println!("{}", window.render());
    println!("{}", button.render());
    println!("{}", button.click_inside(window.as_ref()));
}

fn main() {
    println!("=== Running GUI with Windows Style ===");
    run_gui(&WindowsGuiFactory);

    println!("\n=== Running GUI with macOS Style ===");
    run_gui(&MacGuiFactory);
}
