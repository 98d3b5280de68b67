//! Loads an image, applies a sequence of operations, and saves the result.
//!
//! ```text
//! cargo run --example convert -- input.jpg output.png greyscale flip rescale 320x240
//! ```

use pixbuf::Image;

fn main() -> anyhow::Result<()> {
    pixbuf::init_logger!();

    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            eprintln!("usage: convert <input> <output> [op...]");
            eprintln!("ops: greyscale | flip | mirror | rescale WxH | resize WxH");
            std::process::exit(1);
        }
    };

    let mut image = Image::open(&input)?;
    log::info!("loaded {} ({})", input, image.resolution());

    while let Some(op) = args.next() {
        match op.as_str() {
            "greyscale" => image.greyscale(),
            "flip" => image.flip(),
            "mirror" => image.mirror(),
            "rescale" | "resize" => {
                let dims = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("'{op}' needs a WxH argument"))?;
                let (width, height) = parse_dimensions(&dims)?;
                if op == "rescale" {
                    image.rescale(width, height);
                } else {
                    image.resize(width, height);
                }
            }
            other => anyhow::bail!("unknown operation '{other}'"),
        }
    }

    image.save(&output)?;
    log::info!("saved {} ({})", output, image.resolution());
    Ok(())
}

fn parse_dimensions(s: &str) -> anyhow::Result<(u32, u32)> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| anyhow::anyhow!("expected WxH, got '{s}'"))?;
    Ok((width.parse()?, height.parse()?))
}
