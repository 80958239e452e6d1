mod app;

use app::GlyphApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Portrait window, the wallpaper is 1242x2688
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 960.0])
            .with_min_inner_size([600.0, 600.0])
            .with_title("Glyph Grid")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Glyph Grid",
        options,
        Box::new(|cc| Ok(Box::new(GlyphApp::new(cc)))),
    )
}

/// Icon: a few bright dashes on the wallpaper background
fn load_icon() -> egui::IconData {
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            // Staggered dashes, one per 8-pixel row
            let row = y / 8;
            let is_dash = y % 8 == 4 && (x + row * 3) % 12 < 7;

            let rgb = if is_dash {
                [0xf3, 0x86, 0x30]
            } else {
                [0x21, 0x25, 0x29]
            };
            pixels[idx..idx + 3].copy_from_slice(&rgb);
            pixels[idx + 3] = 255;
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
