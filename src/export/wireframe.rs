//! Interactive HTML wireframe of the selected pages.
//!
//! Layout planning ([`plan_layout`]) is separated from rendering so the
//! placement rules can be checked without parsing HTML.

use crate::export::escape_html;
use crate::models::{PageLayout, PageTemplate};
use crate::wizard::{Viewport, WizardState};
use std::fmt::Write;

/// Visual treatment of a wireframe block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Top navigation or page header bar
    Navbar,
    /// Large hero area
    Hero,
    /// Sidebar navigation column
    SidebarNav,
    /// Page footer
    Footer,
    /// Any other component
    Generic,
}

impl BlockKind {
    const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Navbar => Some("wireframe-navbar"),
            Self::Hero => Some("wireframe-hero"),
            Self::SidebarNav => Some("wireframe-sidebar-nav"),
            Self::Footer => Some("wireframe-footer"),
            Self::Generic => None,
        }
    }
}

/// One labelled component placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Component name from the page template
    pub component: String,
    /// Text shown inside the block
    pub label: String,
    /// Visual treatment
    pub kind: BlockKind,
}

impl Block {
    fn new(component: &str, label: &str, kind: BlockKind) -> Self {
        Self {
            component: component.to_string(),
            label: label.to_string(),
            kind,
        }
    }

    fn generic(component: &str) -> Self {
        Self::new(component, component, BlockKind::Generic)
    }
}

/// Structural container a block is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Primary content area
    Main,
    /// Sidebar column of a sidebar/content split
    Aside,
    /// Secondary column of a two-column layout
    Side,
    /// Centered form card
    Form,
}

/// How the slots are arranged between `before` and `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Stacked sections
    Stack,
    /// Sidebar beside content
    SidebarSplit,
    /// Main column with side column
    TwoColumn,
    /// Centered form card
    CenteredForm,
    /// Centered card pushed down from the top
    CenteredAuth,
}

/// Placement of a page's components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Slot arrangement
    pub arrangement: Arrangement,
    /// Blocks rendered above the slots
    pub before: Vec<Block>,
    /// Structural containers in render order
    pub slots: Vec<(SlotKind, Vec<Block>)>,
    /// Blocks rendered below the slots
    pub after: Vec<Block>,
}

impl LayoutPlan {
    /// Blocks placed in a slot, empty if the layout has no such slot.
    pub fn slot(&self, kind: SlotKind) -> &[Block] {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == kind)
            .map_or(&[], |(_, blocks)| blocks.as_slice())
    }

    /// Every block in render order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.before
            .iter()
            .chain(self.slots.iter().flat_map(|(_, blocks)| blocks.iter()))
            .chain(self.after.iter())
    }
}

/// Places a page's components according to its layout.
///
/// Unknown layouts use the single-column rules.
pub fn plan_layout(page: &PageTemplate) -> LayoutPlan {
    let names = &page.components;
    let has = |name: &str| names.iter().any(|c| c == name);
    let except = |excluded: &[&str]| -> Vec<Block> {
        names
            .iter()
            .filter(|c| !excluded.contains(&c.as_str()))
            .map(|c| Block::generic(c))
            .collect()
    };
    let footer = || {
        if has("Footer") {
            vec![Block::new("Footer", "Footer", BlockKind::Footer)]
        } else {
            Vec::new()
        }
    };
    let navigation = |label: &str| {
        if has("Navigation") {
            vec![Block::new("Navigation", label, BlockKind::Navbar)]
        } else {
            Vec::new()
        }
    };

    match page.layout {
        PageLayout::SidebarLayout => {
            let before = if has("Header") {
                vec![Block::new("Header", "Header", BlockKind::Navbar)]
            } else {
                Vec::new()
            };
            let aside = if has("Sidebar") {
                vec![Block::new("Sidebar", "Sidebar", BlockKind::SidebarNav)]
            } else {
                Vec::new()
            };
            LayoutPlan {
                arrangement: Arrangement::SidebarSplit,
                before,
                slots: vec![
                    (SlotKind::Aside, aside),
                    (SlotKind::Main, except(&["Header", "Sidebar", "Footer"])),
                ],
                after: footer(),
            }
        }
        PageLayout::TwoColumn => {
            let side = names
                .iter()
                .filter(|c| matches!(c.as_str(), "Sidebar" | "Filters"))
                .map(|c| Block::generic(c))
                .collect();
            LayoutPlan {
                arrangement: Arrangement::TwoColumn,
                before: navigation("Navigation"),
                slots: vec![
                    (
                        SlotKind::Main,
                        except(&["Navigation", "Footer", "Sidebar", "Filters"]),
                    ),
                    (SlotKind::Side, side),
                ],
                after: footer(),
            }
        }
        PageLayout::CenteredForm => LayoutPlan {
            arrangement: Arrangement::CenteredForm,
            before: navigation("Navigation"),
            slots: vec![(SlotKind::Form, except(&["Navigation", "Footer"]))],
            after: footer(),
        },
        PageLayout::CenteredAuth => LayoutPlan {
            arrangement: Arrangement::CenteredAuth,
            before: Vec::new(),
            slots: vec![(SlotKind::Form, except(&[]))],
            after: Vec::new(),
        },
        PageLayout::SingleColumn | PageLayout::Other(_) => {
            let mut before = navigation("Navigation Bar");
            if has("Hero") {
                before.push(Block::new("Hero", "Hero Section", BlockKind::Hero));
            }
            LayoutPlan {
                arrangement: Arrangement::Stack,
                before,
                slots: vec![(SlotKind::Main, except(&["Navigation", "Hero", "Footer"]))],
                after: footer(),
            }
        }
    }
}

/// Renders the complete wireframe document for the selected pages.
pub fn generate_wireframe(state: &WizardState) -> String {
    let config = &state.wireframe;
    let name = escape_html(&state.project.name);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - Interactive Wireframe</title>
  <style>
{styles}
  </style>
</head>
<body>
  <div class="wireframe-container">
    <header class="wireframe-header">
      <h1>{name} Wireframe</h1>
      <div class="viewport-controls">
"#,
        styles = wireframe_styles(state),
    );

    for viewport in Viewport::ALL {
        let active = if viewport == config.viewport { " active" } else { "" };
        let _ = writeln!(
            html,
            r#"        <button class="viewport-btn{active}" data-viewport="{}">{}</button>"#,
            viewport.as_str(),
            viewport.label()
        );
    }

    let _ = writeln!(
        html,
        r#"      </div>
    </header>

    <div class="wireframe-viewport {}" id="viewport">"#,
        config.viewport.as_str()
    );

    let block_classes: Vec<&str> = [
        config.show_labels.then_some("show-labels"),
        config.interactive.then_some("interactive"),
    ]
    .into_iter()
    .flatten()
    .collect();
    let block_classes = block_classes.join(" ");

    for (index, page) in state.selected_pages.iter().enumerate() {
        let mut classes = vec!["page-wireframe"];
        if config.show_grid {
            classes.push("show-grid");
        }
        if index == 0 {
            classes.push("active");
        }
        let _ = writeln!(
            html,
            r#"      <div class="{}" data-page="{}">"#,
            classes.join(" "),
            escape_html(&page.id)
        );
        render_plan(&mut html, &plan_layout(page), &block_classes);
        let _ = writeln!(html, "      </div>");
    }

    let _ = writeln!(
        html,
        r#"    </div>

    <aside class="wireframe-sidebar">
      <h2>Pages</h2>
      <nav class="page-nav">"#
    );

    for (index, page) in state.selected_pages.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        let _ = writeln!(
            html,
            r#"        <button class="page-nav-item{active}" data-page="{}">{}</button>"#,
            escape_html(&page.id),
            escape_html(&page.name)
        );
    }

    let checked = |on: bool| if on { " checked" } else { "" };
    let _ = write!(
        html,
        r#"      </nav>

      <h2>Settings</h2>
      <div class="settings">
        <label><input type="checkbox" id="showGrid"{}> Show Grid</label>
        <label><input type="checkbox" id="showLabels"{}> Show Labels</label>
        <label><input type="checkbox" id="interactive"{}> Interactive Mode</label>
      </div>
    </aside>
  </div>

  <script>
{WIREFRAME_SCRIPT}
  </script>
</body>
</html>"#,
        checked(config.show_grid),
        checked(config.show_labels),
        checked(config.interactive),
    );

    html
}

fn render_block(html: &mut String, block: &Block, classes: &str, indent: usize) {
    let mut class = String::from("wireframe-component");
    if let Some(kind) = block.kind.css_class() {
        class.push(' ');
        class.push_str(kind);
    }
    if !classes.is_empty() {
        class.push(' ');
        class.push_str(classes);
    }

    let _ = writeln!(
        html,
        r#"{:indent$}<div class="{class}" data-component="{}">{}</div>"#,
        "",
        escape_html(&block.component),
        escape_html(&block.label),
    );
}

fn render_blocks(html: &mut String, blocks: &[Block], classes: &str, indent: usize) {
    for block in blocks {
        render_block(html, block, classes, indent);
    }
}

fn render_plan(html: &mut String, plan: &LayoutPlan, classes: &str) {
    render_blocks(html, &plan.before, classes, 8);

    match plan.arrangement {
        Arrangement::Stack => {
            let _ = writeln!(html, r#"        <div class="wireframe-content">"#);
            render_blocks(html, plan.slot(SlotKind::Main), classes, 10);
            let _ = writeln!(html, "        </div>");
        }
        Arrangement::SidebarSplit => {
            let _ = writeln!(html, r#"        <div class="wireframe-sidebar-layout">"#);
            render_blocks(html, plan.slot(SlotKind::Aside), classes, 10);
            let _ = writeln!(html, r#"          <div class="wireframe-content">"#);
            render_blocks(html, plan.slot(SlotKind::Main), classes, 12);
            let _ = writeln!(html, "          </div>");
            let _ = writeln!(html, "        </div>");
        }
        Arrangement::TwoColumn => {
            let _ = writeln!(
                html,
                r#"        <div class="wireframe-grid" style="grid-template-columns: 2fr 1fr;">"#
            );
            let _ = writeln!(html, "          <div>");
            render_blocks(html, plan.slot(SlotKind::Main), classes, 12);
            let _ = writeln!(html, "          </div>");
            let _ = writeln!(html, "          <div>");
            render_blocks(html, plan.slot(SlotKind::Side), classes, 12);
            let _ = writeln!(html, "          </div>");
            let _ = writeln!(html, "        </div>");
        }
        Arrangement::CenteredForm | Arrangement::CenteredAuth => {
            let style = if plan.arrangement == Arrangement::CenteredAuth {
                r#" style="margin-top: 10vh;""#
            } else {
                ""
            };
            let _ = writeln!(html, r#"        <div class="wireframe-form"{style}>"#);
            render_blocks(html, plan.slot(SlotKind::Form), classes, 10);
            let _ = writeln!(html, "        </div>");
        }
    }

    render_blocks(html, &plan.after, classes, 8);
}

fn wireframe_styles(state: &WizardState) -> String {
    let tokens = &state.tokens;
    let primary = &tokens.colors.primary;
    let neutral = &tokens.colors.neutral;

    format!(
        r"    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    body {{ font-family: {font}; background: #f5f5f5; color: #333; }}
    .wireframe-container {{ display: grid; grid-template-columns: 1fr 250px; grid-template-rows: auto 1fr; height: 100vh; gap: 1px; background: #ddd; }}
    .wireframe-header {{ grid-column: 1 / -1; background: white; padding: 1rem 2rem; display: flex; justify-content: space-between; align-items: center; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
    .wireframe-header h1 {{ font-size: 1.5rem; color: {p700}; }}
    .viewport-controls {{ display: flex; gap: 0.5rem; }}
    .viewport-btn {{ padding: 0.5rem 1rem; border: 1px solid #ddd; background: white; cursor: pointer; border-radius: 4px; transition: all 0.2s; }}
    .viewport-btn:hover {{ background: #f5f5f5; }}
    .viewport-btn.active {{ background: {p600}; color: white; border-color: {p600}; }}
    .wireframe-viewport {{ background: white; overflow: auto; position: relative; padding: 2rem; }}
    .wireframe-viewport.mobile {{ padding: 2rem 0; }}
    .wireframe-viewport.mobile .page-wireframe {{ max-width: 375px; margin: 0 auto; }}
    .wireframe-viewport.tablet .page-wireframe {{ max-width: 768px; margin: 0 auto; }}
    .wireframe-viewport.desktop .page-wireframe {{ max-width: 1200px; margin: 0 auto; }}
    .page-wireframe {{ width: 100%; min-height: 100vh; background: white; box-shadow: 0 0 20px rgba(0,0,0,0.1); display: none; position: relative; }}
    .page-wireframe.active {{ display: block; }}
    .page-wireframe.show-grid {{ background-image: repeating-linear-gradient(0deg, #f0f0f0 0px, transparent 1px, transparent 20px, #f0f0f0 21px), repeating-linear-gradient(90deg, #f0f0f0 0px, transparent 1px, transparent 20px, #f0f0f0 21px); }}
    .wireframe-sidebar {{ background: white; padding: 1.5rem; overflow-y: auto; }}
    .wireframe-sidebar h2 {{ font-size: 1.125rem; margin-bottom: 1rem; color: {n800}; }}
    .page-nav {{ display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 2rem; }}
    .page-nav-item {{ padding: 0.75rem; border: 1px solid #ddd; background: white; cursor: pointer; border-radius: 4px; text-align: left; transition: all 0.2s; }}
    .page-nav-item:hover {{ background: #f5f5f5; }}
    .page-nav-item.active {{ background: {p100}; border-color: {p300}; color: {p800}; }}
    .settings {{ display: flex; flex-direction: column; gap: 0.75rem; }}
    .settings label {{ display: flex; align-items: center; gap: 0.5rem; cursor: pointer; }}
    .wireframe-component {{ position: relative; padding: 1rem; margin: 0.5rem; border: 2px dashed #ddd; min-height: 60px; display: flex; align-items: center; justify-content: center; background: #fafafa; transition: all 0.2s; }}
    .wireframe-component.show-labels::before {{ content: attr(data-component); position: absolute; top: -10px; left: 10px; background: white; padding: 0 0.5rem; font-size: 0.75rem; color: #666; font-weight: 500; }}
    .wireframe-component.interactive:hover {{ border-color: {p400}; background: {p50}; cursor: pointer; }}
    .wireframe-navbar {{ height: 60px; background: #f0f0f0; border-color: #ccc; }}
    .wireframe-hero {{ min-height: 400px; background: linear-gradient(135deg, #f0f0f0 0%, #e0e0e0 100%); }}
    .wireframe-sidebar-layout {{ display: grid; grid-template-columns: 250px 1fr; min-height: calc(100vh - 60px); }}
    .wireframe-sidebar-nav {{ background: #f8f8f8; border-right: 1px solid #ddd; }}
    .wireframe-content {{ padding: 2rem; }}
    .wireframe-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1rem; padding: 1rem; }}
    .wireframe-form {{ max-width: 500px; margin: 2rem auto; padding: 2rem; background: white; border: 1px solid #ddd; border-radius: 8px; }}
    .wireframe-footer {{ min-height: 200px; background: #2c3e50; color: white; margin-top: auto; }}",
        font = tokens.typography.font_family.sans,
        p50 = primary.shade_50,
        p100 = primary.shade_100,
        p300 = primary.shade_300,
        p400 = primary.shade_400,
        p600 = primary.shade_600,
        p700 = primary.shade_700,
        p800 = primary.shade_800,
        n800 = neutral.shade_800,
    )
}

const WIREFRAME_SCRIPT: &str = r"    document.querySelectorAll('.viewport-btn').forEach(btn => {
      btn.addEventListener('click', (e) => {
        const viewport = e.target.dataset.viewport;
        document.querySelectorAll('.viewport-btn').forEach(b => b.classList.remove('active'));
        e.target.classList.add('active');
        document.getElementById('viewport').className = 'wireframe-viewport ' + viewport;
      });
    });

    document.querySelectorAll('.page-nav-item').forEach(btn => {
      btn.addEventListener('click', (e) => {
        const pageId = e.target.dataset.page;
        document.querySelectorAll('.page-nav-item').forEach(b => b.classList.remove('active'));
        e.target.classList.add('active');
        document.querySelectorAll('.page-wireframe').forEach(page => {
          page.classList.toggle('active', page.dataset.page === pageId);
        });
      });
    });

    document.getElementById('showGrid').addEventListener('change', (e) => {
      document.querySelectorAll('.page-wireframe').forEach(page => {
        page.classList.toggle('show-grid', e.target.checked);
      });
    });

    document.getElementById('showLabels').addEventListener('change', (e) => {
      document.querySelectorAll('.wireframe-component').forEach(comp => {
        comp.classList.toggle('show-labels', e.target.checked);
      });
    });

    document.getElementById('interactive').addEventListener('change', (e) => {
      document.querySelectorAll('.wireframe-component').forEach(comp => {
        comp.classList.toggle('interactive', e.target.checked);
      });
    });";
