//! Complete workflow demonstration for rock2d
//!
//! Run with `RUST_LOG=debug cargo run --example export_rock` to see the
//! generation and export logs.

use rock2d::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== rock2d Complete Demo ===\n");

    // Step 1: Configure rock
    println!("Step 1: Configuring rock...");
    let config = RockConfigBuilder::from_config(RockConfig::default())
        .point_count(40)?
        .color([150, 120, 90])
        .seed(2024)
        .build()?;
    println!("  Size: {} x {}", config.width, config.height);
    println!("  Points: {}", config.point_count);

    // Step 2: Generate rock
    println!("\nStep 2: Generating rock...");
    let mut editor = RockEditor::new(config)?;
    editor.set_anchor(Vec2::new(600.0, 400.0));
    let rock = editor.geometry();
    println!("  Triangles: {}", rock.triangle_count());
    println!("  Hull vertices: {}", rock.outer_body().len());
    println!("  Hull area: {:.1}", rock.hull_area());

    // Step 3: Render silhouette and lit frames
    println!("\nStep 3: Rendering...");
    editor.set_lighting(false);
    let silhouette = editor.frame();
    println!("  Silhouette frame: {:?}", silhouette.rel_dimensions);

    editor.set_angle(25.0);
    editor.toggle_lighting();
    editor.set_color([170, 140, 100]);
    let lit = editor.frame();
    let brightest = lit
        .triangles()
        .iter()
        .map(|t| t.intensity)
        .fold(0.0_f32, f32::max);
    println!("  Lit frame: {:?}", lit.rel_dimensions);
    println!("  Light at {:?}, brightest triangle {:.2}", editor.light_position(), brightest);

    // Step 4: Export
    println!("\nStep 4: Exporting...");
    let dir = std::env::temp_dir();
    let json_path = dir.join("rock2d_demo.json");
    let png_path = dir.join("rock2d_demo.png");
    editor.export_json(&json_path)?;
    editor.export_png(&png_path)?;
    println!("  Wrote {}", json_path.display());
    println!("  Wrote {}", png_path.display());

    println!("\n=== Demo Complete ===");
    Ok(())
}
