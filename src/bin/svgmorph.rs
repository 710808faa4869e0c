use std::{
    cell::RefCell,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use svgmorph::{
    DrawableHandle, EngineConfig, ManualTimeline, MorphEngine, MorphOptions, PlayOptions,
    SamplingBudget, SamplingPolicy, Shape, SvgPathElement, TransformBlend, ViewBox,
};

#[derive(Parser, Debug)]
#[command(name = "svgmorph", version)]
struct Cli {
    /// Log level for diagnostics written to stderr.
    #[arg(long, global = true, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in shapes.
    Shapes,
    /// Render a morph job as one SVG document per frame.
    Frames(FramesArgs),
    /// Print the alignment chosen for two outlines as JSON.
    Align(AlignArgs),
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Source path data.
    #[arg(long)]
    from: String,

    /// Target path data.
    #[arg(long)]
    to: String,

    /// Points per outline.
    #[arg(long, default_value_t = 120)]
    samples: usize,

    /// Only search rotations, never the reversed winding.
    #[arg(long)]
    no_reversal: bool,
}

/// A shape given by preset name or inline.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
enum ShapeRef {
    Preset(String),
    Inline(Shape),
}

impl ShapeRef {
    fn resolve(self) -> anyhow::Result<Shape> {
        match self {
            Self::Preset(name) => {
                svgmorph::preset(&name).with_context(|| format!("unknown preset '{name}'"))
            }
            Self::Inline(shape) => Ok(shape),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct MorphJob {
    start: ShapeRef,
    end: ShapeRef,
    engine: EngineConfig,
    policy: SamplingPolicy,
    optimize: bool,
    check_reversal: bool,
    separation: f64,
    transform: Option<TransformBlend>,
    fps: f64,
    start_offset_ms: f64,
    precision: usize,
}

impl Default for MorphJob {
    fn default() -> Self {
        Self {
            start: ShapeRef::Preset("blob".to_owned()),
            end: ShapeRef::Preset("hexagon".to_owned()),
            engine: EngineConfig::default(),
            policy: SamplingPolicy::default(),
            optimize: true,
            check_reversal: true,
            separation: 0.0,
            transform: None,
            fps: 30.0,
            start_offset_ms: 0.0,
            precision: 2,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Shapes => cmd_shapes(),
        Command::Frames(args) => cmd_frames(args),
        Command::Align(args) => cmd_align(args),
    }
}

fn cmd_shapes() -> anyhow::Result<()> {
    for name in svgmorph::preset_names() {
        let shape = svgmorph::preset(name).with_context(|| format!("preset '{name}'"))?;
        println!("{name:<12} {}", shape.len());
    }
    Ok(())
}

fn read_job_json(path: &Path) -> anyhow::Result<MorphJob> {
    let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
    let r = BufReader::new(f);
    let job: MorphJob = serde_json::from_reader(r).with_context(|| "parse job JSON")?;
    Ok(job)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let job = read_job_json(&args.in_path)?;
    if !job.fps.is_finite() || job.fps <= 0.0 {
        anyhow::bail!("fps must be finite and > 0 (got {})", job.fps);
    }
    let start = job.start.resolve().context("resolve start shape")?;
    let end = job.end.resolve().context("resolve end shape")?;

    let opts = MorphOptions {
        optimize: job.optimize,
        check_reversal: job.check_reversal,
        separation: job.separation,
        ..MorphOptions::default()
    };
    let budget = SamplingBudget::for_shapes(&job.policy, &start, &end);

    let elements: RefCell<Vec<Rc<RefCell<SvgPathElement>>>> = RefCell::default();
    let targets = svgmorph::build_targets(&start, &end, &job.policy, &opts, |_| -> DrawableHandle {
        let el = SvgPathElement::new().shared();
        elements.borrow_mut().push(Rc::clone(&el));
        el
    });
    let elements = elements.into_inner();

    let engine = MorphEngine::new(job.engine);
    for target in targets {
        let target = match job.transform {
            Some(blend) => target.with_transform(blend),
            None => target,
        };
        engine.register(target);
    }

    let mut view_box = start.view_box_or_default().union(&end.view_box_or_default());
    if job.separation != 0.0 {
        view_box = view_box.expand_x(job.separation.abs());
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    engine.render_static(0.0, job.precision);
    let mut frame = 0_usize;
    write_frame(&args.out, frame, &view_box, &elements)?;

    let mut timeline = ManualTimeline::new();
    engine.play(
        PlayOptions::on(&mut timeline)
            .stride(budget.motion_stride)
            .offset(job.start_offset_ms),
    )?;
    let step_ms = 1000.0 / job.fps;
    while !timeline.is_finished() {
        timeline.advance(step_ms);
        frame += 1;
        write_frame(&args.out, frame, &view_box, &elements)?;
    }

    eprintln!(
        "wrote {} frames ({} paths) to {}",
        frame + 1,
        elements.len(),
        args.out.display()
    );
    Ok(())
}

fn write_frame(
    dir: &Path,
    frame: usize,
    view_box: &ViewBox,
    elements: &[Rc<RefCell<SvgPathElement>>],
) -> anyhow::Result<()> {
    let mut doc = format!("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{view_box}\">\n");
    for el in elements {
        doc.push_str("  ");
        doc.push_str(&el.borrow().to_markup());
        doc.push('\n');
    }
    doc.push_str("</svg>\n");

    let path = dir.join(format!("frame_{frame:04}.svg"));
    std::fs::write(&path, doc).with_context(|| format!("write svg '{}'", path.display()))?;
    Ok(())
}

fn cmd_align(args: AlignArgs) -> anyhow::Result<()> {
    let opts = MorphOptions {
        samples: args.samples,
        check_reversal: !args.no_reversal,
        ..MorphOptions::default()
    };
    let (pair, alignment) = svgmorph::build_pair_with_alignment(&args.from, &args.to, &opts)
        .context("build morph pair")?;
    let alignment = alignment.context("alignment search was skipped")?;
    let out = serde_json::json!({
        "samples": pair.len(),
        "offset": alignment.offset,
        "reversed": alignment.reversed,
        "cost": alignment.cost,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
