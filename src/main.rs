//! msa-starter's main application entry point.
//! Collects build information, materializes the chosen template variant
//! and runs the post-generation step.

use log::{info, warn};
use msa_starter::{
    cli::{get_args, Args},
    config::{Answers, BuildInfo},
    error::{default_error_handler, Result},
    hooks::run_post_generation,
    logger::init_logger,
    processor::Materializer,
    prompt::{collect_build_info, DialoguerPrompter},
    renderer::MiniJinjaRenderer,
    template::TemplateVariant,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Starts from the defaults, applies the answers file if given
/// 2. Prompts for every field unless `--use-default` is set, then finalizes
/// 3. Resolves the template variant
/// 4. Resets the output directory and materializes every template file
/// 5. Marks generated scripts executable
fn run(args: Args) -> Result<()> {
    let output_root = args.output_dir()?;

    let mut build_info = BuildInfo::default();
    if let Some(answers) = &args.answers {
        Answers::load(answers)?.apply(&mut build_info)?;
    }
    if !args.use_default {
        build_info = collect_build_info(&DialoguerPrompter::new(), build_info)?;
    }
    let build_info = build_info.finalize();

    let variant = TemplateVariant::for_build_info(&build_info);
    let template_root = variant.resolve(&args.templates)?;
    info!("Generating a {variant} project from {}", template_root.display());

    let renderer = MiniJinjaRenderer::new();
    let materializer = Materializer::new(&renderer, &template_root, &output_root, &build_info);
    let outcomes = materializer.run(|outcome| {
        if outcome.is_success() {
            println!("{outcome}");
        } else {
            eprintln!("{outcome}");
        }
    })?;

    run_post_generation(&output_root)?;

    let failed = outcomes.iter().filter(|outcome| !outcome.is_success()).count();
    if failed > 0 {
        warn!("{failed} of {} files could not be generated", outcomes.len());
    }
    println!("Project generation completed in {}.", output_root.display());
    Ok(())
}
