//! Page assembly: header, navigation side menu, content block, index page.
//!
//! Project files are `./`-prefixed paths with `/` separators. A source file
//! `./pkg/mod.py` is published as `pkg/mod.html` under the output root.

use crate::docstring::{DocContext, DocRenderer};
use crate::escape::html_escape;
use crate::model::{Project, SourcePage};
use crate::render::tree::render_tree;

const ABOUT_URL: &str = "https://github.com/Teskann/Docapy";

/// Output path for `file` with extension `ext`, relative to the output root.
pub fn output_path(file: &str, ext: &str) -> String {
    let path = file.strip_prefix("./").unwrap_or(file);
    let stem = path.strip_suffix(".py").unwrap_or(path);
    format!("{stem}.{ext}")
}

/// Output path of the page for `file`.
pub fn page_path(file: &str) -> String {
    output_path(file, "html")
}

/// `../` repeated once per directory between the output root and `file`.
fn path_back(file: &str) -> String {
    let dirs = file.split('/').count().saturating_sub(2);
    "../".repeat(dirs)
}

fn file_name(file: &str) -> &str {
    file.rsplit('/').next().unwrap_or(file)
}

/// Directory components of a project path, without the leading `.`.
fn directories(file: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = file.split('/').skip(1).collect();
    parts.pop();
    parts
}

/// Document head and navigation bar for the page of `file`.
pub fn page_header(project: &Project, file: &str) -> String {
    let back = path_back(file);
    let name = html_escape(&project.name);

    let mut out = String::from("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str(&format!(
        "<title>{name} Documentation - {}</title>",
        html_escape(file_name(file))
    ));
    out.push_str("<meta name=\"author\" content=\"Docapy\">");
    out.push_str(&format!("<link rel=\"stylesheet\" href=\"{back}style.css\"></head><body>"));

    out.push_str(&format!(
        "<div class=\"navbar\"><a href=\"{back}index.html\" class=\"titla\"><span class=\"title\"><span class=\"blue\">{name}</span> Documentation</span></a><span class=\"links\">"
    ));
    if let Some(github) = &project.github {
        out.push_str(&format!("<a href=\"{}\">View Github</a>", html_escape(github)));
    }
    out.push_str(&format!("<a href=\"{ABOUT_URL}\">About Docapy</a></span></div>"));
    out
}

/// Navigation menu linking every project file, one collapsible entry per
/// directory. `files` must be sorted so that siblings are adjacent.
pub fn side_menu(files: &[String], current: &str) -> String {
    let back = path_back(current);
    let mut out = String::from("<div class=\"sideMenu\"><span class=\"browse\">Browse Project Files</span>");
    let mut open: Vec<&str> = Vec::new();

    for file in files {
        let dirs = directories(file);
        let common = open
            .iter()
            .zip(&dirs)
            .take_while(|(a, b)| a == b)
            .count();

        out.push_str(&"</details>".repeat(open.len() - common));
        open.truncate(common);
        for dir in &dirs[common..] {
            out.push_str(&format!(
                "<details class=\"menuDetails\"><summary class=\"menuSummary\">{}</summary>",
                html_escape(dir)
            ));
            open.push(*dir);
        }

        out.push_str(&format!(
            "<a href=\"{back}{}\" class=\"menua\">{}</a>",
            html_escape(&page_path(file)),
            html_escape(file_name(file))
        ));
    }

    out.push_str(&"</details>".repeat(open.len()));
    out.push_str("</div>");
    out
}

/// The documentation block of one file: module description, then the
/// entity tree when the file defines anything.
pub fn content_block(page: &SourcePage, docs: &DocRenderer, indent_unit: usize) -> String {
    let mut out = String::from("<div class=\"content\"><h2>File Description</h2>");
    out.push_str(&docs.render(page.module_doc.as_deref(), DocContext::File));
    if !page.entities.is_empty() {
        out.push_str("<h2>Functions & Classes</h2>");
        out.push_str(&render_tree(&page.entities, docs, indent_unit));
    }
    out.push_str("</div>");
    out
}

/// Complete page for one source file.
pub fn source_page(
    project: &Project,
    page: &SourcePage,
    docs: &DocRenderer,
    indent_unit: usize,
) -> String {
    let mut out = page_header(project, &page.path);
    out.push_str(&format!("<h1>{}</h1>", html_escape(file_name(&page.path))));
    out.push_str(&side_menu(&project.files, &page.path));
    out.push_str(&content_block(page, docs, indent_unit));
    out.push_str("</body></html>");
    out
}

/// Landing page at the output root.
pub fn index_page(project: &Project) -> String {
    const INDEX: &str = "./index.py";
    let name = html_escape(&project.name);

    let mut out = page_header(project, INDEX);
    out.push_str(&side_menu(&project.files, INDEX));
    out.push_str(&format!(
        "<h1>{} DOCUMENTATION</h1>",
        html_escape(&project.name.to_uppercase())
    ));
    out.push_str("<div class=\"content\"><h2>Welcome !</h2>");
    out.push_str(&format!(
        "<p>Welcome to the documentation of the {name} project !<br><br>\
         This website inventories all the documentation for all the Python files (*.py) of the project. \
         There is one page per file. You can browse files now using the browser on the left.<br>\
         This website contains the documentation for all the functions and classes of the {name} project.\
         <br><br><br></p>"
    ));
    if let Some(github) = &project.github {
        let github = html_escape(github);
        out.push_str(&format!(
            "<h2>About the Project</h2><p>For more details, check out the repository here : \
             <a href=\"{github}\">{github}</a><br><br><br></p>"
        ));
    }
    out.push_str(&format!(
        "<h2>About the Documentation</h2><p>This website has been automatically generated by Docapy. \
         Check the Docapy repository here : <a href=\"{ABOUT_URL}\">{ABOUT_URL}</a></p></div>"
    ));
    out.push_str("</body></html>");
    out
}
