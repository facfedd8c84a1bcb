use crate::{
    command::Command,
    error::ConsoleError,
    render,
    source::TableSource,
};
use gavel_core::{
    catalog::{ApiSource, Catalog, CatalogQuery, TypeCategory},
    table::{OrderDirection, PageRequest, SortSpec, TableQuery},
};
use std::fmt::Write;
use tracing::debug;

///
/// Reply
///

#[derive(Debug)]
pub enum Reply {
    Text(String),
    Quit,
}

///
/// Session
///
/// All mutable console state. The engines stay pure; this layer owns the
/// view-state they are handed on each recomputation and enforces the
/// caller-side contracts: a search change resets the page, repeated sort
/// on one field flips direction, page moves clamp to the last page.
///

pub struct Session {
    sources: Vec<Box<dyn TableSource>>,
    catalogs: Vec<Catalog>,
    page_size: u32,
    mode: Mode,
}

enum Mode {
    Idle,
    Table(TableState),
    Catalog(CatalogState),
}

struct TableState {
    source: usize,
    search: String,
    sort: Option<SortSpec>,
    page: u32,
}

struct CatalogState {
    catalog: usize,
    search: String,
    categories: Vec<TypeCategory>,
}

impl Session {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn TableSource>>, catalogs: Vec<Catalog>, page_size: u32) -> Self {
        Self {
            sources,
            catalogs,
            page_size: page_size.max(1),
            mode: Mode::Idle,
        }
    }

    /// Apply one command and produce the text to print.
    pub fn apply(&mut self, command: Command) -> Result<Reply, ConsoleError> {
        debug!(?command, "applying console command");

        let text = match command {
            Command::Quit => return Ok(Reply::Quit),
            Command::Help => help_text(),
            Command::Datasets => self.list_datasets(),
            Command::Open(name) => self.open(&name)?,
            Command::Search(query) => self.set_search(query)?,
            Command::Sort { field, direction } => self.set_sort(field, direction)?,
            Command::Page(number) => self.goto_page(PageMove::To(number))?,
            Command::Next => self.goto_page(PageMove::Next)?,
            Command::Prev => self.goto_page(PageMove::Prev)?,
            Command::First => self.goto_page(PageMove::To(1))?,
            Command::Last => self.goto_page(PageMove::Last)?,
            Command::Show => self.render_current()?,
            Command::Glossary(api) => self.open_glossary(api),
            Command::Filter(categories) => self.toggle_filters(categories)?,
            Command::TypeDetail(name) => self.type_detail(&name)?,
            Command::Counts => self.counts()?,
            Command::Export => self.export()?,
        };

        Ok(Reply::Text(text))
    }

    fn list_datasets(&self) -> String {
        let mut out = String::new();
        for source in &self.sources {
            let _ = writeln!(out, "  {:<15} {} rows", source.name(), source.len());
        }
        let _ = writeln!(out, "  {:<15} type glossaries (management, client)", "glossary");
        out
    }

    fn open(&mut self, name: &str) -> Result<String, ConsoleError> {
        let index = self
            .sources
            .iter()
            .position(|source| source.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let available = self
                    .sources
                    .iter()
                    .map(|source| source.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                ConsoleError::UnknownDataset(name.to_string(), available)
            })?;

        self.mode = Mode::Table(TableState {
            source: index,
            search: String::new(),
            sort: None,
            page: 1,
        });

        self.render_current()
    }

    fn set_search(&mut self, query: Option<String>) -> Result<String, ConsoleError> {
        match &mut self.mode {
            Mode::Table(state) => {
                state.search = query.unwrap_or_default();
                // A new search invalidates the old page position.
                state.page = 1;
                self.render_current()
            }
            Mode::Catalog(state) => {
                state.search = query.unwrap_or_default();
                self.render_current()
            }
            Mode::Idle => Err(ConsoleError::NoDataset),
        }
    }

    fn set_sort(
        &mut self,
        field: Option<String>,
        direction: Option<OrderDirection>,
    ) -> Result<String, ConsoleError> {
        let Mode::Table(state) = &mut self.mode else {
            return Err(ConsoleError::NoDataset);
        };
        let source = &self.sources[state.source];

        let Some(field) = field else {
            state.sort = None;
            return self.render_current();
        };

        let sortable = source
            .columns()
            .iter()
            .any(|column| column.sortable && column.key == field);
        if !sortable {
            let candidates = source
                .columns()
                .iter()
                .filter(|column| column.sortable)
                .map(|column| column.key)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ConsoleError::UnknownField {
                field,
                sortable: candidates,
            });
        }

        let resolved = direction.unwrap_or_else(|| match &state.sort {
            // Repeating the current sort field flips direction.
            Some(current) if current.field == field => current.direction.toggled(),
            _ => OrderDirection::Asc,
        });

        state.sort = Some(SortSpec::new(field, resolved));
        self.render_current()
    }

    fn goto_page(&mut self, step: PageMove) -> Result<String, ConsoleError> {
        let Mode::Table(state) = &mut self.mode else {
            return Err(ConsoleError::NoDataset);
        };

        let total = {
            let source = &self.sources[state.source];
            let query = table_query(state, self.page_size);
            source.view(&query).total_pages
        };
        let last = total.max(1);

        state.page = match step {
            PageMove::To(number) => number.clamp(1, last),
            PageMove::Next => state.page.saturating_add(1).min(last),
            PageMove::Prev => state.page.saturating_sub(1).max(1),
            PageMove::Last => last,
        };

        self.render_current()
    }

    fn open_glossary(&mut self, api: Option<ApiSource>) -> String {
        let api = api.unwrap_or(ApiSource::Management);
        let index = self
            .catalogs
            .iter()
            .position(|catalog| catalog.api == api)
            .unwrap_or(0);

        self.mode = Mode::Catalog(CatalogState {
            catalog: index,
            search: String::new(),
            categories: Vec::new(),
        });

        self.render_current().unwrap_or_default()
    }

    fn toggle_filters(&mut self, categories: Vec<TypeCategory>) -> Result<String, ConsoleError> {
        let Mode::Catalog(state) = &mut self.mode else {
            return Err(ConsoleError::NoDataset);
        };

        if categories.is_empty() {
            state.categories.clear();
        } else {
            for category in categories {
                if let Some(position) = state.categories.iter().position(|c| *c == category) {
                    state.categories.remove(position);
                } else {
                    state.categories.push(category);
                }
            }
        }

        self.render_current()
    }

    fn type_detail(&self, name: &str) -> Result<String, ConsoleError> {
        let catalog = self.current_catalog();
        catalog
            .type_def(name)
            .map(render::type_detail)
            .ok_or_else(|| ConsoleError::UnknownType(name.to_string()))
    }

    fn counts(&self) -> Result<String, ConsoleError> {
        match &self.mode {
            Mode::Table(state) => {
                let source = &self.sources[state.source];
                let query = table_query(state, self.page_size);
                let grid = source.view(&query);
                Ok(format!(
                    "{}: {} of {} rows match\n",
                    source.title(),
                    grid.filtered,
                    source.len()
                ))
            }
            _ => Ok(render::counts(self.current_catalog())),
        }
    }

    fn export(&self) -> Result<String, ConsoleError> {
        match &self.mode {
            Mode::Table(state) => {
                let source = &self.sources[state.source];
                let query = table_query(state, self.page_size);
                let json = source.export(&query)?;
                Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
            }
            Mode::Catalog(state) => {
                let catalog = &self.catalogs[state.catalog];
                let view = catalog_query(state).execute(&catalog.sections);
                Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
            }
            Mode::Idle => Err(ConsoleError::NoDataset),
        }
    }

    fn render_current(&self) -> Result<String, ConsoleError> {
        match &self.mode {
            Mode::Idle => Err(ConsoleError::NoDataset),
            Mode::Table(state) => {
                let source = &self.sources[state.source];
                let query = table_query(state, self.page_size);
                let grid = source.view(&query);
                Ok(render::table(source.title(), &grid))
            }
            Mode::Catalog(state) => {
                let catalog = &self.catalogs[state.catalog];
                let view = catalog_query(state).execute(&catalog.sections);
                Ok(render::glossary(&catalog.api.to_string(), &view))
            }
        }
    }

    fn current_catalog(&self) -> &Catalog {
        if let Mode::Catalog(state) = &self.mode {
            return &self.catalogs[state.catalog];
        }
        &self.catalogs[0]
    }
}

enum PageMove {
    To(u32),
    Next,
    Prev,
    Last,
}

fn table_query(state: &TableState, page_size: u32) -> TableQuery {
    TableQuery::new()
        .search(state.search.clone())
        .sorted(state.sort.clone())
        .page(PageRequest::new(state.page, page_size))
}

fn catalog_query(state: &CatalogState) -> CatalogQuery {
    CatalogQuery::new()
        .search(state.search.clone())
        .categories(state.categories.clone())
}

fn help_text() -> String {
    "\
  datasets                list available datasets
  open <dataset>          open a dataset view
  search [text]           filter rows (empty clears; resets to page 1)
  sort [field] [asc|desc] sort by a column; repeat to flip, no args to clear
  page <n> | next | prev | first | last
  show                    re-render the current view
  glossary [management|client]
  filter [cat,cat...]     toggle glossary category filters (empty clears)
  type <name>             show one type definition
  counts                  summary counts for the current view
  export                  dump the current view as JSON
  quit\n"
        .to_string()
}
