//! Command implementations.
//!
//! Every command writes to a caller-supplied [`Write`] so the same code
//! serves the binary (stdout) and the tests (a `Vec<u8>`).

use std::io::Write;
use std::path::{Path, PathBuf};

use gradus_outline::{
    Curriculum, Level, builtin, load_outline, load_workbooks, render_markdown, validate,
    write_outline,
};
use gradus_core::ConfigManager;
use gradus_query::{CurriculumIndex, FlashcardScope, flashcards, to_json, to_tsv};

use crate::cli::{Cli, Commands, RenderFormat};
use crate::config::{FlashcardFormat, GradusConfig};
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Normal completion.
    Success,
    /// The command ran but found problems (e.g. validation errors).
    Failure,
}

// ============================================================================
// Entry points
// ============================================================================

/// Load the configuration a command line runs with.
///
/// `config` subcommands get the defaults instead: they read and write the
/// file themselves, so they still work when it is missing or does not
/// parse.
///
/// # Errors
///
/// Returns the [`ConfigManager::load`] error for every other command.
pub fn load_config(cli: &Cli) -> gradus_core::Result<GradusConfig> {
    if matches!(cli.command, Commands::Config { .. }) {
        log::debug!("config subcommand, skipping config file load");
        return Ok(GradusConfig::default());
    }
    GradusConfig::load(cli.config.as_deref())
}

/// Run a parsed command line.
pub async fn run(cli: Cli, config: &GradusConfig, out: &mut impl Write) -> Result<Outcome> {
    if let Commands::Config { action } = cli.command {
        handle_config_command(cli.config.as_deref(), action, out)?;
        return Ok(Outcome::Success);
    }

    let curriculum = load_curriculum(cli.outline.as_deref(), config).await?;

    match cli.command {
        Commands::Levels => cmd_levels(&curriculum, out)?,
        Commands::Show { rank } => cmd_show(&curriculum, rank, out)?,
        Commands::Find { id } => cmd_find(&curriculum, id, out)?,
        Commands::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search.default_limit);
            cmd_search(&curriculum, &query, limit, out)?
        }
        Commands::Topic { name } => {
            cmd_topic(&curriculum, &name, config.search.fuzzy_threshold, out)?
        }
        Commands::Validate => return cmd_validate(&curriculum, out),
        Commands::Stats => cmd_stats(&curriculum, out)?,
        Commands::Duplicates => cmd_duplicates(&curriculum, out)?,
        Commands::Render { format } => cmd_render(&curriculum, format, out)?,
        Commands::Flashcards { level, format } => {
            let format = format.unwrap_or(config.flashcards.format);
            cmd_flashcards(&curriculum, level, format, out)?
        }
        Commands::Workbooks { dir } => {
            let dir = dir.or_else(|| config.workbook_dir()).ok_or_else(|| {
                Error::config("No workbook directory: pass one or set outline.workbook_dir")
            })?;
            cmd_workbooks(&curriculum, &dir, out).await?
        }
        Commands::Config { .. } => {}
    }

    Ok(Outcome::Success)
}

/// Load the curriculum from `--outline`, then `outline.path`, then the
/// built-in outline.
pub async fn load_curriculum(explicit: Option<&Path>, config: &GradusConfig) -> Result<Curriculum> {
    let path: Option<PathBuf> = explicit.map(Path::to_path_buf).or_else(|| config.outline_path());
    match path {
        Some(path) => {
            log::info!("Loading outline from {}", path.display());
            Ok(load_outline(&path).await?)
        }
        None => {
            log::debug!("Using built-in curriculum");
            Ok(builtin::arrays()?)
        }
    }
}

// ============================================================================
// Browsing
// ============================================================================

fn level_heading(level: &Level) -> String {
    if level.title.is_empty() {
        format!("Level {}", level.rank)
    } else {
        format!("Level {} — {}", level.rank, level.title)
    }
}

/// One line per level with counts.
pub fn cmd_levels(curriculum: &Curriculum, out: &mut impl Write) -> Result<()> {
    if !curriculum.title.is_empty() {
        writeln!(out, "{}", curriculum.title)?;
        writeln!(out)?;
    }
    for level in &curriculum.levels {
        writeln!(
            out,
            "{:>2}. {}  ({} topics, {} problems)",
            level.rank,
            level.title,
            level.topics.len(),
            level.problem_count()
        )?;
    }
    Ok(())
}

/// One level in full.
pub fn cmd_show(curriculum: &Curriculum, rank: u8, out: &mut impl Write) -> Result<()> {
    let level = curriculum
        .level(rank)
        .ok_or_else(|| Error::not_found("level", rank.to_string()))?;

    writeln!(out, "{}", level_heading(level))?;
    if !level.skills.is_empty() {
        writeln!(out, "Skills: {}", level.skills)?;
    }
    for topic in &level.topics {
        writeln!(out)?;
        writeln!(out, "  {}", topic.name)?;
        for problem in &topic.problems {
            writeln!(out, "    {problem}")?;
        }
    }
    if !level.goal.is_empty() {
        writeln!(out)?;
        writeln!(out, "Goal: {}", level.goal)?;
    }
    Ok(())
}

/// Where a problem ID appears.
pub fn cmd_find(curriculum: &Curriculum, id: u32, out: &mut impl Write) -> Result<()> {
    let index = CurriculumIndex::new(curriculum);
    let mut entries = index.entries_for(id).peekable();
    if entries.peek().is_none() {
        return Err(Error::not_found("problem", id.to_string()));
    }
    for entry in entries {
        writeln!(out, "{}  ({})", entry.location(), entry.problem)?;
    }
    Ok(())
}

/// Weighted search.
pub fn cmd_search(
    curriculum: &Curriculum,
    query: &str,
    limit: usize,
    out: &mut impl Write,
) -> Result<()> {
    let index = CurriculumIndex::new(curriculum);
    let hits = index.search(query, limit);
    if hits.is_empty() {
        writeln!(out, "No matches for '{query}'")?;
        return Ok(());
    }
    for hit in hits {
        writeln!(out, "{:>4.1}  {}  [{}]", hit.score, hit.problem, hit.location)?;
    }
    Ok(())
}

/// Fuzzy topic lookup.
pub fn cmd_topic(
    curriculum: &Curriculum,
    name: &str,
    threshold: f64,
    out: &mut impl Write,
) -> Result<()> {
    let index = CurriculumIndex::new(curriculum);
    let matches = index.resolve_topic(name, threshold);
    if matches.is_empty() {
        return Err(Error::TopicNotFound {
            name: name.to_string(),
            suggestions: index
                .suggest_topics(name, 3)
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    for (i, found) in matches.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} / {}", level_heading(found.level), found.topic.name)?;
        for problem in &found.topic.problems {
            writeln!(out, "    {problem}")?;
        }
    }
    Ok(())
}

// ============================================================================
// Checks and summaries
// ============================================================================

/// Print violations; [`Outcome::Failure`] if any are errors.
pub fn cmd_validate(curriculum: &Curriculum, out: &mut impl Write) -> Result<Outcome> {
    let report = validate(curriculum);
    for violation in &report.violations {
        writeln!(out, "{violation}")?;
    }
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    writeln!(out, "{errors} error(s), {warnings} warning(s)")?;

    Ok(if report.is_valid() {
        Outcome::Success
    } else {
        Outcome::Failure
    })
}

/// Per-level and total counts.
pub fn cmd_stats(curriculum: &Curriculum, out: &mut impl Write) -> Result<()> {
    let stats = CurriculumIndex::new(curriculum).stats();
    writeln!(out, "{:<5} {:>6} {:>8}  Title", "Level", "Topics", "Problems")?;
    for level in &stats.levels {
        writeln!(
            out,
            "{:<5} {:>6} {:>8}  {}",
            level.rank, level.topics, level.references, level.title
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Levels:          {}", stats.levels.len())?;
    writeln!(out, "Topics:          {}", stats.topics)?;
    writeln!(out, "References:      {}", stats.references)?;
    writeln!(out, "Unique problems: {}", stats.unique_problems)?;
    writeln!(out, "Repeated:        {}", stats.repeated_problems)?;
    Ok(())
}

/// Problem IDs listed more than once.
pub fn cmd_duplicates(curriculum: &Curriculum, out: &mut impl Write) -> Result<()> {
    let duplicates = CurriculumIndex::new(curriculum).duplicates();
    if duplicates.is_empty() {
        writeln!(out, "No repeated problems")?;
        return Ok(());
    }
    for duplicate in duplicates {
        let places: Vec<String> = duplicate.locations.iter().map(ToString::to_string).collect();
        writeln!(out, "{} {}: {}", duplicate.id, duplicate.title, places.join("; "))?;
    }
    Ok(())
}

// ============================================================================
// Export
// ============================================================================

/// Print the curriculum in `format`.
pub fn cmd_render(
    curriculum: &Curriculum,
    format: RenderFormat,
    out: &mut impl Write,
) -> Result<()> {
    let text = match format {
        RenderFormat::Outline => write_outline(curriculum),
        RenderFormat::Markdown => render_markdown(curriculum),
        RenderFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(curriculum).map_err(gradus_core::Error::from)?;
            json.push('\n');
            json
        }
        RenderFormat::Toml => toml::to_string_pretty(curriculum)
            .map_err(|e| Error::config(format!("TOML serialization failed: {e}")))?,
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Export flashcards.
pub fn cmd_flashcards(
    curriculum: &Curriculum,
    level: Option<u8>,
    format: FlashcardFormat,
    out: &mut impl Write,
) -> Result<()> {
    let cards = flashcards(curriculum, FlashcardScope { level })?;
    match format {
        FlashcardFormat::Tsv => out.write_all(to_tsv(&cards).as_bytes())?,
        FlashcardFormat::Json => writeln!(out, "{}", to_json(&cards)?)?,
    }
    Ok(())
}

/// List workbook exercises and coverage.
pub async fn cmd_workbooks(
    curriculum: &Curriculum,
    dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let workbooks = load_workbooks(dir).await?;
    let index = CurriculumIndex::new(curriculum);

    for workbook in &workbooks {
        let name = workbook
            .source
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = workbook.title.as_deref().unwrap_or("untitled");
        writeln!(
            out,
            "{name}: {title} ({} exercises, {} open)",
            workbook.exercises.len(),
            workbook.pending_count()
        )?;
        for exercise in &workbook.exercises {
            let mark = if exercise.pending { "[ ]" } else { "[x]" };
            let link = exercise
                .problem
                .map(|id| {
                    let known = if index.contains(id) { "" } else { ", not in curriculum" };
                    format!(" (LC {id}{known})")
                })
                .unwrap_or_default();
            let advanced = if exercise.advanced { " [advanced]" } else { "" };
            writeln!(out, "  {mark} {} {}{link}{advanced}", exercise.number, exercise.title)?;
        }
    }

    let coverage = index.coverage(&workbooks);
    writeln!(out)?;
    writeln!(
        out,
        "Coverage: {}/{} curriculum problems have an exercise ({:.0}%)",
        coverage.covered.len(),
        coverage.covered.len() + coverage.uncovered.len(),
        coverage.ratio() * 100.0
    )?;
    if !coverage.outside.is_empty() {
        writeln!(out, "Linked outside the curriculum: {}", coverage.outside.len())?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
