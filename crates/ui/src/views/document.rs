use dioxus::prelude::*;

use journey_core::model::{Accent, Block, Cell, Highlight, ListItem, Table, Tone};
use journey_core::model::{DialogueLine, Document};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ComparisonTab {
    Before,
    After,
}

fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "doc-label doc-label--blue",
        Accent::Green => "doc-label doc-label--green",
        Accent::Purple => "doc-label doc-label--purple",
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Blue => "doc-dialogue doc-dialogue--blue",
        Tone::Green => "doc-dialogue doc-dialogue--green",
        Tone::Yellow => "doc-dialogue doc-dialogue--yellow",
        Tone::Purple => "doc-dialogue doc-dialogue--purple",
        Tone::Pink => "doc-dialogue doc-dialogue--pink",
    }
}

fn cell_class(cell: &Cell) -> &'static str {
    match cell.highlight {
        Highlight::None => "doc-cell",
        Highlight::Problem => "doc-cell doc-cell--problem",
        Highlight::Resolved => "doc-cell doc-cell--resolved",
    }
}

/// Renders a content document. `page` identifies the page being shown so that
/// per-page widget state (the comparison tabs) starts fresh on every page.
#[component]
pub fn DocumentView(page: usize, document: Document) -> Element {
    rsx! {
        div { class: "document",
            for (index, block) in document.blocks().iter().enumerate() {
                BlockView { key: "{page}-{index}", page, block: block.clone() }
            }
        }
    }
}

#[component]
fn BlockView(page: usize, block: Block) -> Element {
    match block {
        Block::Title { text } => rsx! {
            h2 { class: "doc-title", "{text}" }
        },
        Block::Lead { text } => rsx! {
            p { class: "doc-lead", "{text}" }
        },
        Block::Paragraph { text } => rsx! {
            p { class: "doc-paragraph", "{text}" }
        },
        Block::Heading { text } => rsx! {
            h3 { class: "doc-heading", "{text}" }
        },
        Block::BulletList { items } => rsx! {
            ul { class: "doc-list",
                for item in items {
                    ListItemView { item }
                }
            }
        },
        Block::NumberedList { items } => rsx! {
            ol { class: "doc-list doc-list--numbered",
                for item in items {
                    ListItemView { item }
                }
            }
        },
        Block::Comparison { before, after } => rsx! {
            ComparisonTabs { page, before, after }
        },
        Block::Image { src, alt } => rsx! {
            div { class: "doc-image",
                img { src: "{src}", alt: "{alt}" }
            }
        },
        Block::Character { name, description } => rsx! {
            div { class: "doc-character",
                h3 { class: "doc-character__name", "{name}" }
                p { "{description}" }
            }
        },
        Block::Dialogue { tone, lines } => rsx! {
            div { class: tone_class(tone),
                for line in lines {
                    DialogueLineView { line }
                }
            }
        },
    }
}

#[component]
fn ListItemView(item: ListItem) -> Element {
    rsx! {
        li {
            if let Some(label) = item.label.as_ref() {
                span { class: accent_class(label.accent), "{label.text}" }
            }
            "{item.text}"
        }
    }
}

#[component]
fn DialogueLineView(line: DialogueLine) -> Element {
    rsx! {
        p { class: "doc-dialogue__line",
            span { class: "doc-dialogue__speaker", "{line.speaker}:" }
            " {line.text}"
        }
    }
}

#[component]
fn ComparisonTabs(page: usize, before: Vec<Table>, after: Vec<Table>) -> Element {
    // Selection is remembered per page; a different page falls back to "before".
    let mut selected = use_signal(|| (page, ComparisonTab::Before));
    let active = match selected() {
        (owner, tab) if owner == page => tab,
        _ => ComparisonTab::Before,
    };
    let tables = match active {
        ComparisonTab::Before => before,
        ComparisonTab::After => after,
    };
    let tab_class = |tab: ComparisonTab| {
        if tab == active {
            "doc-tab doc-tab--active"
        } else {
            "doc-tab"
        }
    };

    rsx! {
        div { class: "doc-tabs",
            div { class: "doc-tabs__list", role: "tablist",
                button {
                    class: tab_class(ComparisonTab::Before),
                    role: "tab",
                    onclick: move |_| selected.set((page, ComparisonTab::Before)),
                    "正規化前"
                }
                button {
                    class: tab_class(ComparisonTab::After),
                    role: "tab",
                    onclick: move |_| selected.set((page, ComparisonTab::After)),
                    "正規化後"
                }
            }
            div { class: "doc-tabs__panel", role: "tabpanel",
                for data in tables {
                    TableView { data }
                }
            }
        }
    }
}

#[component]
fn TableView(data: Table) -> Element {
    rsx! {
        div { class: "doc-table",
            if let Some(caption) = data.caption.as_ref() {
                h4 { class: "doc-table__caption", "{caption}" }
            }
            table {
                thead {
                    tr {
                        for header in data.headers.iter() {
                            th { "{header}" }
                        }
                    }
                }
                tbody {
                    for row in data.rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td { class: cell_class(cell), "{cell.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
