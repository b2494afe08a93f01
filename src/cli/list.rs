//! List command implementation.
//!
//! Prints the built-in presets, schemes and pattern types.

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::Printer;
use crate::presets::{GRADIENT_PRESETS, RESOLUTION_PRESETS, SPLATTER_PRESETS};
use crate::scheme::ColorScheme;
use crate::types::PatternKind;

/// List built-in presets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one group
    #[arg(value_enum)]
    pub group: Option<ListGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListGroup {
    Splatter,
    Gradient,
    Resolution,
    Scheme,
    Pattern,
}

impl ListGroup {
    const ALL: [ListGroup; 5] = [
        ListGroup::Splatter,
        ListGroup::Gradient,
        ListGroup::Resolution,
        ListGroup::Scheme,
        ListGroup::Pattern,
    ];

    fn label(self) -> &'static str {
        match self {
            ListGroup::Splatter => "Splatters",
            ListGroup::Gradient => "Gradients",
            ListGroup::Resolution => "Sizes",
            ListGroup::Scheme => "Schemes",
            ListGroup::Pattern => "Patterns",
        }
    }
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let groups = match args.group {
        Some(group) => vec![group],
        None => ListGroup::ALL.to_vec(),
    };

    for group in groups {
        printer.info(group.label(), "");
        for line in group_lines(group) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// One line per entry: slug followed by a short description.
pub fn group_lines(group: ListGroup) -> Vec<String> {
    match group {
        ListGroup::Splatter => SPLATTER_PRESETS
            .iter()
            .map(|p| {
                format!(
                    "{:<20} {} colours, {} splatters, {}-{}px",
                    p.slug(),
                    p.colours.len(),
                    p.count,
                    p.min_size,
                    p.max_size
                )
            })
            .collect(),
        ListGroup::Gradient => GRADIENT_PRESETS
            .iter()
            .map(|p| format!("{:<20} {}", p.slug(), p.to_config().to_css()))
            .collect(),
        ListGroup::Resolution => RESOLUTION_PRESETS
            .iter()
            .map(|p| format!("{:<20} {}", p.slug(), p.resolution))
            .collect(),
        ListGroup::Scheme => ColorScheme::ALL.iter().map(|s| s.to_string()).collect(),
        ListGroup::Pattern => PatternKind::ALL
            .iter()
            .map(|k| {
                let note = if k.is_reproducible() {
                    "seeded"
                } else {
                    "random layout"
                };
                format!("{:<20} {}", k, note)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_lines_cover_presets() {
        assert_eq!(group_lines(ListGroup::Splatter).len(), SPLATTER_PRESETS.len());
        assert_eq!(group_lines(ListGroup::Gradient).len(), GRADIENT_PRESETS.len());
        assert_eq!(group_lines(ListGroup::Scheme).len(), 6);
    }

    #[test]
    fn test_resolution_lines() {
        let lines = group_lines(ListGroup::Resolution);
        assert!(lines.iter().any(|l| l.starts_with("full-hd") && l.ends_with("1920x1080")));
        assert!(lines.iter().any(|l| l.starts_with("twitter-header") && l.ends_with("1500x500")));
    }

    #[test]
    fn test_gradient_lines_show_css() {
        let lines = group_lines(ListGroup::Gradient);
        assert!(lines[0].starts_with("sunset "));
        assert!(lines[0].ends_with("linear-gradient(45deg, #ff512f 0%, #f09819 100%)"));
    }

    #[test]
    fn test_pattern_lines() {
        insta::assert_snapshot!(group_lines(ListGroup::Pattern).join("\n"), @r"
        waves                seeded
        voronoi              random layout
        geometric            random layout
        flow                 random layout
        ");
    }

    #[test]
    fn test_run_single_group() {
        let args = ListArgs {
            group: Some(ListGroup::Scheme),
        };
        assert!(run(args, &Printer::new()).is_ok());
    }
}
