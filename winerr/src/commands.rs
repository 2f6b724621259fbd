//! Subcommand implementations.
//!
//! Every command writes its result to the given writer and reports whether
//! anything matched; the caller turns that into the process exit status.

use anyhow::{Context, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use winerr_common::export::{CodeEntry, export_to_dir};
use winerr_common::status::{self, FACILITY_NTWIN32, StatusFields};
use winerr_common::{
    Catalog, ErrorCode, Family, OutputFormat, generate_export, generate_export_schema,
    parse_definitions, parse_value,
};

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

impl Outcome {
    fn from_found(found: bool) -> Self {
        if found { Self::Found } else { Self::NotFound }
    }
}

/// Output settings shared by all commands.
#[derive(Debug, Clone, Copy)]
pub struct OutputContext {
    format: OutputFormat,
}

impl OutputContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn json<T: Serialize>(&self, out: &mut dyn Write, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Both catalogs, borrowed from the built-ins until definitions extend one.
#[derive(Debug, Clone)]
pub struct Catalogs {
    ntstatus: Cow<'static, Catalog>,
    win32: Cow<'static, Catalog>,
}

impl Catalogs {
    pub fn builtin() -> Self {
        Self {
            ntstatus: Cow::Borrowed(winerr_common::ntstatus()),
            win32: Cow::Borrowed(winerr_common::win32()),
        }
    }

    /// Built-in catalogs extended with each definition file, in order.
    pub fn load(definitions: &[PathBuf]) -> Result<Self> {
        let mut catalogs = Self::builtin();
        for path in definitions {
            catalogs.apply_file(path)?;
        }
        Ok(catalogs)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read definitions from {}", path.display()))?;
        let file = parse_definitions(&text)
            .with_context(|| format!("invalid definitions in {}", path.display()))?;

        let catalog = match file.family() {
            Family::NtStatus => self.ntstatus.to_mut(),
            Family::Win32 => self.win32.to_mut(),
        };
        let added = file
            .apply(catalog)
            .with_context(|| format!("failed to apply definitions from {}", path.display()))?;
        info!(path = %path.display(), family = file.family().id(), added, "loaded definitions");
        Ok(())
    }

    pub fn get(&self, family: Family) -> &Catalog {
        match family {
            Family::NtStatus => &self.ntstatus,
            Family::Win32 => &self.win32,
        }
    }

    /// The catalog for `family`, or both when no family was given.
    pub fn selected(&self, family: Option<Family>) -> Vec<&Catalog> {
        match family {
            Some(family) => vec![self.get(family)],
            None => Family::all().iter().map(|&f| self.get(f)).collect(),
        }
    }
}

fn print_code(out: &mut dyn Write, catalog: &Catalog, code: &ErrorCode) -> Result<()> {
    writeln!(
        out,
        "{:<8} {:>10}  {}",
        catalog.family().name(),
        catalog.family().format_value(code.value()),
        code.name()
    )?;
    writeln!(out, "    {}", code.description())?;
    Ok(())
}

/// `winerr lookup <VALUE>`
pub fn lookup(
    ctx: &OutputContext,
    out: &mut dyn Write,
    catalogs: &Catalogs,
    value: &str,
    family: Option<Family>,
) -> Result<Outcome> {
    let value = parse_value(value)?;
    debug!(value, ?family, "lookup");

    let matches: Vec<(&Catalog, &ErrorCode)> = catalogs
        .selected(family)
        .into_iter()
        .filter_map(|catalog| catalog.lookup_by_value(value).map(|code| (catalog, code)))
        .collect();

    if ctx.is_json() {
        let entries: Vec<CodeEntry> = matches
            .iter()
            .map(|(catalog, code)| CodeEntry::from_code(catalog, code))
            .collect();
        ctx.json(out, &entries)?;
    } else if matches.is_empty() {
        for catalog in catalogs.selected(family) {
            writeln!(out, "{}", catalog.label(value))?;
        }
    } else {
        for (catalog, code) in &matches {
            print_code(out, catalog, code)?;
        }
    }

    Ok(Outcome::from_found(!matches.is_empty()))
}

/// `winerr name <NAME>`
pub fn name(
    ctx: &OutputContext,
    out: &mut dyn Write,
    catalogs: &Catalogs,
    name: &str,
) -> Result<Outcome> {
    let found = Family::all().iter().find_map(|&family| {
        let catalog = catalogs.get(family);
        catalog.lookup_by_name(name).map(|code| (catalog, code))
    });

    match (found, ctx.is_json()) {
        (Some((catalog, code)), true) => ctx.json(out, &CodeEntry::from_code(catalog, code))?,
        (Some((catalog, code)), false) => print_code(out, catalog, code)?,
        (None, true) => ctx.json(out, &serde_json::Value::Null)?,
        (None, false) => writeln!(out, "no error code named {name}")?,
    }

    Ok(Outcome::from_found(found.is_some()))
}

/// `winerr list`
pub fn list(
    ctx: &OutputContext,
    out: &mut dyn Write,
    catalogs: &Catalogs,
    family: Option<Family>,
) -> Result<Outcome> {
    let selected = catalogs.selected(family);
    if ctx.is_json() {
        ctx.json(out, &generate_export(&selected))?;
        return Ok(Outcome::Found);
    }

    for catalog in selected {
        writeln!(out, "# {} ({} codes)", catalog.family().name(), catalog.len())?;
        for code in catalog {
            writeln!(
                out,
                "{:>10}  {}",
                catalog.family().format_value(code.value()),
                code.name()
            )?;
        }
    }
    Ok(Outcome::Found)
}

/// A raw 32-bit value taken apart as an NTSTATUS.
#[derive(Debug, Serialize)]
struct Decoded {
    value: u32,
    display_value: String,
    fields: StatusFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    facility_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ntstatus: Option<CodeEntry>,
    /// NTSTATUS wrapped by an `HRESULT_FROM_NT` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    wrapped_ntstatus: Option<CodeEntry>,
    /// Win32 code carried by `NTSTATUS_FROM_WIN32` or `HRESULT_FROM_WIN32`.
    #[serde(skip_serializing_if = "Option::is_none")]
    win32_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    win32: Option<CodeEntry>,
}

fn decode_value(catalogs: &Catalogs, value: u32) -> Decoded {
    let fields = StatusFields::decode(value);
    let nt = catalogs.get(Family::NtStatus);
    let legacy = catalogs.get(Family::Win32);

    let ntstatus = nt
        .lookup_by_value(value)
        .map(|code| CodeEntry::from_code(nt, code));

    let wrapped_ntstatus = fields
        .reserved
        .then(|| StatusFields {
            reserved: false,
            ..fields
        })
        .and_then(|inner| nt.lookup_by_value(inner.encode()))
        .map(|code| CodeEntry::from_code(nt, code));

    let win32_code = if fields.facility == FACILITY_NTWIN32
        && status::ntstatus_from_win32(u32::from(fields.code)) == value
    {
        Some(u32::from(fields.code))
    } else if value != 0 {
        status::win32_from_hresult(value)
    } else {
        None
    };
    let win32 = win32_code
        .and_then(|code| legacy.lookup_by_value(code))
        .map(|code| CodeEntry::from_code(legacy, code));

    Decoded {
        value,
        display_value: Family::NtStatus.format_value(value),
        fields,
        facility_name: fields.facility_name(),
        ntstatus,
        wrapped_ntstatus,
        win32_code,
        win32,
    }
}

/// `winerr decode <VALUE>`
pub fn decode(
    ctx: &OutputContext,
    out: &mut dyn Write,
    catalogs: &Catalogs,
    value: &str,
) -> Result<Outcome> {
    let value = parse_value(value)?;
    let decoded = decode_value(catalogs, value);
    let found = decoded.ntstatus.is_some()
        || decoded.wrapped_ntstatus.is_some()
        || decoded.win32.is_some();

    if ctx.is_json() {
        ctx.json(out, &decoded)?;
        return Ok(Outcome::from_found(found));
    }

    let fields = &decoded.fields;
    writeln!(out, "value     {}", decoded.display_value)?;
    writeln!(out, "severity  {}", fields.severity)?;
    writeln!(out, "customer  {}", fields.customer)?;
    writeln!(
        out,
        "facility  {:#05X} {}",
        fields.facility,
        decoded.facility_name.unwrap_or("(unknown)")
    )?;
    writeln!(out, "code      {:#06X}", fields.code)?;
    if let Some(entry) = &decoded.ntstatus {
        writeln!(out, "ntstatus  {}: {}", entry.name, entry.description)?;
    }
    if let Some(entry) = &decoded.wrapped_ntstatus {
        writeln!(out, "wraps     {} ({})", entry.name, entry.display_value)?;
    }
    match (decoded.win32_code, &decoded.win32) {
        (Some(_), Some(entry)) => writeln!(out, "win32     {} {}", entry.value, entry.name)?,
        (Some(code), None) => writeln!(out, "win32     {code} (unknown)")?,
        (None, _) => {}
    }
    Ok(Outcome::from_found(found))
}

/// `winerr export`
pub fn export(
    ctx: &OutputContext,
    out: &mut dyn Write,
    catalogs: &Catalogs,
    family: Option<Family>,
    output_dir: Option<&Path>,
) -> Result<Outcome> {
    let selected = catalogs.selected(family);
    match output_dir {
        Some(dir) => {
            let result = export_to_dir(dir, &selected)
                .with_context(|| format!("failed to export to {}", dir.display()))?;
            if ctx.is_json() {
                ctx.json(out, &result)?;
            } else {
                for file in &result.files {
                    writeln!(out, "wrote {file}")?;
                }
            }
        }
        None => ctx.json(out, &generate_export(&selected))?,
    }
    Ok(Outcome::Found)
}

/// `winerr schema`
pub fn schema(ctx: &OutputContext, out: &mut dyn Write) -> Result<Outcome> {
    ctx.json(out, &generate_export_schema())?;
    Ok(Outcome::Found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> OutputContext {
        OutputContext::new(OutputFormat::Text)
    }

    fn json() -> OutputContext {
        OutputContext::new(OutputFormat::Json)
    }

    fn run<F>(f: F) -> (Outcome, String)
    where
        F: FnOnce(&mut dyn Write) -> Result<Outcome>,
    {
        let mut buf = Vec::new();
        let outcome = f(&mut buf).unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_lookup_hex_value_text() {
        let catalogs = Catalogs::builtin();
        let (outcome, output) =
            run(|out| lookup(&text(), out, &catalogs, "0xC0000005", Some(Family::NtStatus)));
        assert_eq!(outcome, Outcome::Found);
        assert!(output.contains("STATUS_ACCESS_VIOLATION"));
        assert!(output.contains("0xC0000005"));
    }

    #[test]
    fn test_lookup_without_family_searches_both() {
        let catalogs = Catalogs::builtin();
        let (outcome, output) = run(|out| lookup(&json(), out, &catalogs, "0", None));
        assert_eq!(outcome, Outcome::Found);
        let entries: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = entries
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["STATUS_SUCCESS", "ERROR_SUCCESS"]);
    }

    #[test]
    fn test_lookup_unknown_value_is_not_found() {
        let catalogs = Catalogs::builtin();
        let (outcome, output) =
            run(|out| lookup(&text(), out, &catalogs, "999999", Some(Family::Win32)));
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(output.trim(), "unknown Win32 999999");
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let catalogs = Catalogs::builtin();
        let mut buf = Vec::new();
        let err = lookup(&text(), &mut buf, &catalogs, "nope", None).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let catalogs = Catalogs::builtin();
        let (outcome, output) = run(|out| name(&text(), out, &catalogs, "WAIT_TIMEOUT"));
        assert_eq!(outcome, Outcome::Found);
        assert!(output.contains("258"));

        let (outcome, _) = run(|out| name(&text(), out, &catalogs, "wait_timeout"));
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn test_list_single_family() {
        let catalogs = Catalogs::builtin();
        let (_, output) = run(|out| list(&text(), out, &catalogs, Some(Family::Win32)));
        let lines = output.lines().count();
        assert_eq!(lines, catalogs.get(Family::Win32).len() + 1);
        assert!(output.starts_with("# Win32"));
    }

    #[test]
    fn test_decode_ntstatus_from_win32() {
        let catalogs = Catalogs::builtin();
        let value = status::ntstatus_from_win32(5);
        let (_, output) = run(|out| decode(&text(), out, &catalogs, &format!("{value:#X}")));
        assert!(output.contains("FACILITY_NTWIN32"));
        assert!(output.contains("win32     5 ERROR_ACCESS_DENIED"));
    }

    #[test]
    fn test_decode_hresult_from_nt() {
        let catalogs = Catalogs::builtin();
        let value = status::hresult_from_nt(0xC000_0005);
        let (outcome, output) = run(|out| decode(&json(), out, &catalogs, &value.to_string()));
        assert_eq!(outcome, Outcome::Found);
        let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(doc["wrapped_ntstatus"]["name"], "STATUS_ACCESS_VIOLATION");
        assert_eq!(doc["fields"]["reserved"], true);
    }

    #[test]
    fn test_definitions_extend_only_their_family() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contoso.toml");
        std::fs::write(
            &path,
            "family = \"win32\"\n\n[[code]]\nname = \"ERROR_CONTOSO_QUOTA\"\nvalue = 70001\ndescription = \"Quota exceeded.\"\n",
        )
        .unwrap();

        let catalogs = Catalogs::load(&[path]).unwrap();
        assert!(matches!(catalogs.win32, Cow::Owned(_)));
        assert!(matches!(catalogs.ntstatus, Cow::Borrowed(_)));

        let (outcome, _) = run(|out| lookup(&text(), out, &catalogs, "70001", None));
        assert_eq!(outcome, Outcome::Found);
    }

    #[test]
    fn test_definition_collision_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(
            &path,
            "family = \"win32\"\n\n[[code]]\nname = \"ERROR_MINE\"\nvalue = 5\ndescription = \"Mine.\"\n",
        )
        .unwrap();

        let err = Catalogs::load(&[path]).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.toml"));
        assert!(message.contains("ERROR_ACCESS_DENIED"));
    }

    #[test]
    fn test_export_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let catalogs = Catalogs::builtin();
        let (_, output) = run(|out| {
            export(
                &text(),
                out,
                &catalogs,
                Some(Family::NtStatus),
                Some(dir.path()),
            )
        });
        assert_eq!(output.lines().count(), 2);
        let written = std::fs::read_to_string(dir.path().join("error-codes.json")).unwrap();
        assert!(written.contains("STATUS_ACCESS_VIOLATION"));
        assert!(!written.contains("ERROR_ACCESS_DENIED"));
    }

    #[test]
    fn test_schema_is_json() {
        let (_, output) = run(|out| schema(&text(), out));
        let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(doc["properties"]["codes"].is_object());
    }
}
