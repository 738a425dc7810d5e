//! Command-line arguments and their translation into library calls.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use styleprint::{
    OptionKey, Printer, Registry, RegistryConfig, ResolvedStyle, Slot, StyleOptions,
    StyleRegistries, StyleResolver, TypeSpec, WarningPolicy,
};

/// Print text wrapped in ANSI styles chosen by name.
#[derive(Debug, Parser)]
#[command(name = "sprint", version, about)]
pub struct Cli {
    /// Text to print; multiple values are joined with the separator
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Font: roman, bold, italic, underline, blink, mark, strikethrough
    #[arg(short, long)]
    pub font: Option<String>,

    /// Foreground color name or alias
    #[arg(short, long)]
    pub color: Option<String>,

    /// Background color name or alias
    #[arg(short = 'b', long = "bgcolor", visible_alias = "background")]
    pub background: Option<String>,

    /// Named style type, e.g. warning, alert, fail, okay
    #[arg(short = 't', long = "type")]
    pub style_type: Option<String>,

    /// Raw KEY=VALUE style keyword (font, f, color, c, bgcolor, bc, type, ...)
    #[arg(short, long = "style", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub styles: Vec<(String, String)>,

    /// Register an alias before styling
    #[arg(long, value_name = "NAME=TARGET", value_parser = parse_pair)]
    pub alias: Vec<(String, String)>,

    /// Register a style type before styling
    #[arg(
        long = "define-type",
        value_name = "NAME=FONT,COLOR,BACKGROUND",
        value_parser = parse_type
    )]
    pub define_type: Vec<(String, TypeSpec)>,

    /// YAML file with extra aliases and types
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Separator placed between TEXT values
    #[arg(long = "sep", default_value = " ")]
    pub separator: String,

    /// Text written after the styled output
    #[arg(long, default_value = "\n")]
    pub end: String,

    /// Do not write the trailing line end
    #[arg(short = 'n', long)]
    pub no_newline: bool,

    /// Suppress style warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log registrations and other debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// List every registered name rendered in its own style
    #[arg(long, conflicts_with = "demo")]
    pub list: bool,

    /// Print a couple of sample lines
    #[arg(long)]
    pub demo: bool,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn parse_type(s: &str) -> Result<(String, TypeSpec), String> {
    let (name, triple) = parse_pair(s)?;
    let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [font, color, background] => Ok((name, TypeSpec::new(*font, *color, *background))),
        _ => Err(format!("expected NAME=FONT,COLOR,BACKGROUND, got '{}'", s)),
    }
}

impl Cli {
    /// Builds the resolver: config file first, then `--alias`, then `--define-type`.
    pub fn resolver(&self) -> Result<StyleResolver> {
        let mut registries = StyleRegistries::builtin();

        if let Some(path) = &self.config {
            let config = RegistryConfig::from_path(path)
                .with_context(|| format!("loading {}", path.display()))?;
            registries.apply_config(&config);
        }
        for (name, target) in &self.alias {
            registries.register_alias(name.as_str(), target.as_str());
        }
        for (name, spec) in &self.define_type {
            registries.register_type(name.as_str(), spec.clone());
        }

        Ok(StyleResolver::new(registries))
    }

    /// Collects the style request. Named flags take precedence over `--style`
    /// pairs for the same keyword.
    pub fn options(&self) -> StyleOptions {
        let mut opts = StyleOptions::from_pairs(self.styles.iter().map(|(k, v)| (k, v.as_str())));
        let flags = [
            (OptionKey::Font, &self.font),
            (OptionKey::Color, &self.color),
            (OptionKey::BackgroundColor, &self.background),
            (OptionKey::Type, &self.style_type),
        ];
        for (key, value) in flags {
            if let Some(value) = value {
                opts.insert(key, value.as_str());
            }
        }
        opts
    }

    pub fn printer(&self) -> Printer {
        let end = if self.no_newline { "" } else { self.end.as_str() };
        let policy = if self.quiet {
            WarningPolicy::Ignore
        } else {
            WarningPolicy::Log
        };
        Printer::new()
            .separator(self.separator.as_str())
            .line_end(end)
            .flush(true)
            .warnings(policy)
    }

    /// Executes the command against `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let resolver = self.resolver()?;

        if self.list {
            return list_registries(&resolver, out);
        }
        if self.demo {
            return demo(&resolver, out);
        }
        if self.texts.is_empty() {
            bail!("nothing to print; pass TEXT, --list or --demo");
        }

        self.printer()
            .print(&resolver, &self.texts, out, &self.options())
            .context("writing styled output")?;
        Ok(())
    }
}

/// Code for `name` in `table`, or the slot's fallback code.
fn code(table: &Registry<u8>, slot: Slot, name: &str) -> u8 {
    table
        .get(name)
        .or_else(|| table.get(slot.fallback_name()))
        .copied()
        .unwrap_or_default()
}

/// Lists registry entries straight from the tables, so an alias sharing a
/// name with an entry does not change how that entry is shown.
fn list_registries<W: Write>(resolver: &StyleResolver, out: &mut W) -> Result<()> {
    let registries = resolver.registries();
    let (fonts, colors, backgrounds) =
        (registries.fonts(), registries.colors(), registries.backgrounds());
    let defaults = ResolvedStyle::new(
        code(fonts, Slot::Font, Slot::Font.default_name()),
        code(colors, Slot::Color, Slot::Color.default_name()),
        code(backgrounds, Slot::Background, Slot::Background.default_name()),
    );

    let sections = [
        (Slot::Font, fonts),
        (Slot::Color, colors),
        (Slot::Background, backgrounds),
    ];
    for (slot, table) in sections {
        writeln!(out, "{}s:", slot.label())?;
        for name in table.names() {
            let value = code(table, slot, name);
            let style = match slot {
                Slot::Font => ResolvedStyle { font: value, ..defaults },
                Slot::Color => ResolvedStyle { color: value, ..defaults },
                Slot::Background => ResolvedStyle { background: value, ..defaults },
            };
            writeln!(out, "  {}", style.apply(name))?;
        }
    }

    writeln!(out, "types:")?;
    for name in registries.types().names() {
        if let Some(spec) = registries.types().get(name) {
            let style = ResolvedStyle::new(
                code(fonts, Slot::Font, &spec.font),
                code(colors, Slot::Color, &spec.color),
                code(backgrounds, Slot::Background, &spec.background),
            );
            writeln!(out, "  {}", style.apply(name))?;
        }
    }

    writeln!(out, "aliases:")?;
    for name in registries.aliases().names() {
        if let Some(target) = registries.aliases().get(name) {
            writeln!(out, "  {} -> {}", name, target)?;
        }
    }
    Ok(())
}

fn demo<W: Write>(resolver: &StyleResolver, out: &mut W) -> Result<()> {
    let printer = Printer::new();
    printer.print(
        resolver,
        ["Hello world!"],
        out,
        &StyleOptions::new().style_type("alert"),
    )?;
    printer.print(
        resolver,
        ["Hello moon!"],
        out,
        &StyleOptions::from_pairs([("color", "w"), ("bcolor", "red"), ("font", "italic")]),
    )?;
    Ok(())
}
