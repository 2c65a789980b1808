use std::io;
use std::path::PathBuf;

use anyhow::Result;
use choosy::domain::ports::RecordingSurface;
use choosy::domain::services::classify;
use choosy::infrastructure::TerminalSurface;
use choosy::ui::terminal::{detect_capabilities, TerminalCapabilities};
use choosy::ui::theme::Icons;
use choosy::ui::widgets::dropdown::{parse_script, run_interactive, run_script};
use choosy::{
    ChangeEvent, ChangeSink, ChoosyError, Config, Dropdown, DropdownProps, JsonEventSink,
    RawEntry, SelectControl, Selection, SelectionType,
};

/// Arguments of `choosy pick`
#[derive(Debug, Clone)]
pub struct PickOptions {
    pub control: PathBuf,
    pub entries: Option<PathBuf>,
    pub selection_type: Option<SelectionType>,
    pub keys: Option<String>,
    pub write: bool,
    pub stream: bool,
}

pub fn cmd_pick(opts: &PickOptions, config: &Config, ascii: bool, json: bool) -> Result<()> {
    let mut control = SelectControl::load(&opts.control)?;
    let mut props = control.parse()?.props();

    if let Some(path) = &opts.entries {
        let raw: Vec<RawEntry> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        props.choices = classify(raw)?.into();
    }
    if let Some(selection_type) = opts.selection_type {
        props.selection_type = selection_type;
    }
    let props = config.apply(props);

    let caps = detect_capabilities();
    let icons = Icons::new(!ascii && config.display.unicode && caps.supports_unicode);
    let picked = if opts.stream {
        pick_with(props, JsonEventSink::stdout(), opts, config, &caps, icons)?
    } else {
        let sink = |selection: &Selection| {
            tracing::debug!(selected = selection.len(), "selection changed");
        };
        pick_with(props, sink, opts, config, &caps, icons)?
    };

    let Some(selection) = picked else {
        return Err(ChoosyError::Aborted.into());
    };

    control.write_back(&selection);
    if opts.write {
        control.save(&opts.control)?;
    }

    if json {
        println!("{}", ChangeEvent::new(selection).to_json());
    } else {
        let values: Vec<&str> = selection.keys().collect();
        println!("Selected: {}", values.join(", "));
    }
    Ok(())
}

fn pick_with<C>(
    props: DropdownProps,
    sink: C,
    opts: &PickOptions,
    config: &Config,
    caps: &TerminalCapabilities,
    icons: Icons,
) -> Result<Option<Selection>>
where
    C: ChangeSink,
{
    if opts.keys.is_none() && caps.is_interactive() {
        let caps = TerminalCapabilities {
            supports_color: config.display.color.enabled(caps.supports_color),
            ..*caps
        };
        let mut dropdown = Dropdown::new(props, TerminalSurface::new(io::stdout()), sink);
        return Ok(run_interactive(&mut dropdown, &caps, icons)?);
    }

    if opts.keys.is_none() {
        tracing::info!("no terminal attached, keeping the initial selection");
    }
    let keys = parse_script(opts.keys.as_deref().unwrap_or_default())?;
    let mut dropdown = Dropdown::new(props, RecordingSurface::new(), sink);
    Ok(run_script(&mut dropdown, &keys))
}
