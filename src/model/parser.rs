// File: ./src/model/parser.rs
//
// Text side of the command pipeline: splits a raw Spanish sentence into a
// title and a date rule clause, pulls task metadata out of the title, strips
// filler connectors, and expands list-style commands into individual items.
//
// Every stage is a pure (text in, value + remaining text out) transformation;
// matched spans are erased from the working title so later categories cannot
// re-match them.
use crate::model::record::{ExtractedMetadata, Priority, ReminderLead, Status};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("vocabulary pattern must compile")
}

/// Temporal expressions recognized by the heuristic clause scanner, most
/// specific first. "pasado mañana" must precede "mañana", and the bare
/// "a las H" form must come after the day-level expressions that may carry
/// the same hour tail.
static RULE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let hour_tail =
        r"(?:\s+a\s+las?\s+\d{1,2}(?:\s*(?:am|pm|de\s+la\s+(?:mañana|tarde|noche)))?)?";
    let months = "enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre\
                  |octubre|noviembre|diciembre";
    let sources = [
        format!(r"(?i)pasado\s+mañana{hour_tail}"),
        format!(r"(?i)mañana{hour_tail}"),
        format!(r"(?i)hoy{hour_tail}"),
        format!(
            r"(?i)(?:el\s+)?(?:lunes|martes|mi[eé]rcoles|jueves|viernes|s[aá]bado|domingo){hour_tail}"
        ),
        format!(r"(?i)\d{{1,2}}\s+de\s+(?:{months})(?:\s+(?:de\s+)?\d{{4}})?{hour_tail}"),
        r"(?i)a\s+las?\s+\d{1,2}(?:\s*(?:am|pm|de\s+la\s+(?:mañana|tarde|noche)))?".to_string(),
        r"(?i)en\s+(?:\d+|un|una|dos|tres|cuatro|cinco|seis|siete|ocho|nueve|diez|media|med\w+)\s+(?:horas?|hr?s?|minutos?|mins?|segundos?|segs?)"
            .to_string(),
    ];
    sources.iter().map(|p| compile(p)).collect()
});

static PRIORITY_RULES: Lazy<Vec<(Priority, Regex)>> = Lazy::new(|| {
    vec![
        (
            Priority::Alta,
            compile(r"(?i)prioridad\s+alta|urgente|muy\s+importante|importante|importe"),
        ),
        (
            Priority::Baja,
            compile(r"(?i)prioridad\s+baja|luego|no\s+urgente"),
        ),
        (Priority::Media, compile(r"(?i)prioridad\s+media|normal")),
    ]
});

static STATUS_RULES: Lazy<Vec<(Status, Regex)>> = Lazy::new(|| {
    vec![
        (
            Status::EnCurso,
            compile(r"(?i)estado\s+en\s+curso|en\s+proceso|trabajando"),
        ),
        (
            Status::Listo,
            compile(r"(?i)estado\s+listo|hecho|terminado|completado|finalizado"),
        ),
        (
            Status::SinEmpezar,
            compile(r"(?i)estado\s+sin\s+empezar|pendiente"),
        ),
    ]
});

static LEAD_RULES: Lazy<Vec<(ReminderLead, Regex)>> = Lazy::new(|| {
    vec![
        (
            ReminderLead::OneDayBefore,
            compile(
                r"(?i)(?:recu[eé]rdame|recordar?(?:me)?)\s+(?:un|1)\s+d[ií]a\s+antes|(?:un|1)\s+d[ií]a\s+antes",
            ),
        ),
        (
            ReminderLead::OneHourBefore,
            compile(
                r"(?i)(?:recu[eé]rdame|recordar?(?:me)?)\s+(?:una|1)\s+hora\s+antes|(?:una|1)\s+hora\s+antes",
            ),
        ),
    ]
});

static LIST_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?:para|en|a)\s+(?:la\s+)?lista\s+(?:de\s+)?(\w+)"));

/// Leading connectors that add nothing to a title. Longest alternation first
/// so "tengo que" is not half-stripped as "que".
static FILLER_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^(?:tengo\s+que|recuérdame|recuerdame|recuerda|avísame|avisame|avisar|avisa|agregar|anotar|poner|que|para)\s+",
    )
});

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\s{2,}"));

/// Comma or word-bounded "y"/"e" conjunction between list items.
static ITEM_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\s*(?:,|\by\b|\be\b)\s*"));

/// Separates the task title from the date rule clause.
///
/// A literal `#` is the explicit, user-authored separator. Without one, the
/// first matching temporal pattern supplies the clause while the title keeps
/// the full original text. When nothing matches, the whole text doubles as
/// the clause so the fallback date parser still gets a chance. This stage
/// never fails.
pub fn split_title_and_rule(input: &str) -> (String, String) {
    if let Some((title, rule)) = input.split_once('#') {
        return (title.to_string(), rule.trim().to_string());
    }
    for (idx, re) in RULE_PATTERNS.iter().enumerate() {
        if let Some(m) = re.find(input) {
            debug!("temporal pattern {} supplies rule clause '{}'", idx, m.as_str());
            return (input.to_string(), m.as_str().to_string());
        }
    }
    (input.to_string(), input.to_string())
}

/// Applies an ordered rule table: the first pattern that matches wins, its
/// span is replaced by a single space and the text re-trimmed.
fn extract_first<T: Copy>(text: &str, rules: &[(T, Regex)], default: T) -> (T, String) {
    for (value, re) in rules {
        if let Some(m) = re.find(text) {
            let mut cleaned = String::with_capacity(text.len());
            cleaned.push_str(&text[..m.start()]);
            cleaned.push(' ');
            cleaned.push_str(&text[m.end()..]);
            return (*value, cleaned.trim().to_string());
        }
    }
    (default, text.trim().to_string())
}

fn extract_list_label(text: &str) -> (Option<String>, String) {
    if let Some(caps) = LIST_LABEL_RE.captures(text) {
        let label = capitalize_first(&caps[1]);
        let full = caps.get(0).expect("capture 0 always present");
        let mut cleaned = String::with_capacity(text.len());
        cleaned.push_str(&text[..full.start()]);
        cleaned.push(' ');
        cleaned.push_str(&text[full.end()..]);
        return (Some(label), cleaned.trim().to_string());
    }
    (None, text.trim().to_string())
}

/// Pulls priority, status, reminder lead and list label out of the working
/// title, in that fixed order. Categories do not compete with each other;
/// within a category only the first match counts. Extraction never fails,
/// defaults cover the unmatched categories.
pub fn extract_metadata(title: &str) -> (ExtractedMetadata, String) {
    let (priority, rest) = extract_first(title, &PRIORITY_RULES, Priority::default());
    let (status, rest) = extract_first(&rest, &STATUS_RULES, Status::default());
    let (reminder_lead, rest) = extract_first(&rest, &LEAD_RULES, ReminderLead::default());
    let (list_label, rest) = extract_list_label(&rest);
    debug!(
        "metadata: priority={} status={} lead={} label={:?}",
        priority, status, reminder_lead, list_label
    );
    (
        ExtractedMetadata {
            priority,
            status,
            reminder_lead,
            list_label,
        },
        rest,
    )
}

/// Strips one leading filler connector, collapses whitespace runs and trims.
/// An empty result falls back to the placeholder so records never carry an
/// empty title.
pub fn normalize_title(title: &str, placeholder: &str) -> String {
    let stripped = FILLER_PREFIX_RE.replace(title.trim(), "");
    let collapsed = MULTI_SPACE_RE.replace_all(stripped.trim(), " ");
    let result = collapsed.trim();
    if result.is_empty() {
        placeholder.to_string()
    } else {
        result.to_string()
    }
}

/// Splits a list-style title ("Leche, pan y huevos") into capitalized items.
/// Empty fragments are discarded; the caller only expands into multiple
/// records when more than one item remains.
pub fn split_list_items(title: &str) -> Vec<String> {
    ITEM_SEPARATOR_RE
        .split(title)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize_first)
        .collect()
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
