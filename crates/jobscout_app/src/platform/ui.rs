//! Terminal front-end: command parsing and view rendering.

use jobscout_core::{AppViewModel, ChatEntry, FilterKind, Msg, Theme, UserProfile};

pub(crate) const HELP: &str = "\
commands:
  home                       open the home feed
  jobs                       open the job listings
  filters / close            open or close the filter panel
  city <name>                toggle a city filter
  category <name>            toggle a category filter
  payfrom [n] / payto [n]    set or clear a pay bound
  apply                      apply filters (back to page 1)
  clear                      clear all filters
  page <n>                   jump to a result page
  chat <message>             ask the assistant
  profile <name>;<surname>;<location>;<cat,cat,...>
  theme                      toggle light/dark
  help / quit";

pub(crate) enum Command {
    Msgs(Vec<Msg>),
    Quit,
    Help,
    Unknown(String),
}

pub(crate) fn parse(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = |msg: Msg| Command::Msgs(vec![msg]);
    match word {
        "" => Command::Msgs(Vec::new()),
        "quit" | "exit" => Command::Quit,
        "help" => Command::Help,
        "home" => msg(Msg::HomeOpened),
        "jobs" => msg(Msg::ListingsOpened),
        "filters" => msg(Msg::FilterPanelToggled(true)),
        "close" => msg(Msg::FilterPanelToggled(false)),
        "city" if !rest.is_empty() => msg(Msg::FilterToggled {
            kind: FilterKind::City,
            value: rest.to_string(),
        }),
        "category" if !rest.is_empty() => msg(Msg::FilterToggled {
            kind: FilterKind::Category,
            value: rest.to_string(),
        }),
        "payfrom" => msg(Msg::PayFromChanged(rest.to_string())),
        "payto" => msg(Msg::PayToChanged(rest.to_string())),
        "apply" => msg(Msg::ApplyFiltersClicked),
        "clear" => msg(Msg::ClearFiltersClicked),
        "page" => match rest.parse::<u32>() {
            Ok(page) => msg(Msg::PageRequested(page)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "chat" if !rest.is_empty() => Command::Msgs(vec![
            Msg::ChatDraftChanged(rest.to_string()),
            Msg::ChatSubmitted,
        ]),
        "profile" => match parse_profile(rest) {
            Some(profile) => msg(Msg::ProfileUpdated { profile }),
            None => Command::Unknown(line.to_string()),
        },
        "theme" => msg(Msg::ThemeToggled),
        _ => Command::Unknown(line.to_string()),
    }
}

fn parse_profile(rest: &str) -> Option<UserProfile> {
    let mut fields = rest.split(';').map(str::trim);
    let name = fields.next()?.to_string();
    let surname = fields.next().unwrap_or("").to_string();
    let location = fields.next().unwrap_or("").to_string();
    let categories = fields
        .next()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    if name.is_empty() {
        return None;
    }
    Some(UserProfile {
        name,
        surname,
        location,
        categories,
    })
}

pub(crate) fn render(view: &AppViewModel) {
    let theme = match view.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    println!("--- jobscout ({theme}) ---");

    if !view.feed.recommended.is_empty()
        || !view.feed.newest.is_empty()
        || !view.feed.local.is_empty()
    {
        render_feed_section("Recommended For You", &view.feed.recommended);
        render_feed_section("Newest Jobs", &view.feed.newest);
        render_feed_section("Near You", &view.feed.local);
    }

    if view.listings.jobs.is_empty() {
        println!("No jobs match the selected filters.");
    } else {
        for job in &view.listings.jobs {
            println!(
                "  {} | {} | {} | {} | {}",
                job.title, job.company, job.location, job.category, job.salary_line
            );
        }
    }
    println!(
        "Page {} of {}",
        view.listings.current_page, view.listings.total_pages
    );

    if view.listings.panel_open {
        println!("City:");
        for facet in &view.listings.city_facets {
            let mark = if facet.selected { "*" } else { " " };
            println!(" [{mark}] {} ({})", facet.label, facet.count);
        }
        println!("Categories:");
        for facet in &view.listings.category_facets {
            let mark = if facet.selected { "*" } else { " " };
            println!(" [{mark}] {} ({})", facet.label, facet.count);
        }
        println!(
            "Pay range: {} - {}",
            or_dash(&view.listings.pay_from),
            or_dash(&view.listings.pay_to)
        );
    }

    for entry in view.chat.transcript.iter().rev().take(4).rev() {
        match entry {
            ChatEntry::User { text } => println!("you> {text}"),
            ChatEntry::Bot { reply } => {
                if let Some(sql) = &reply.sql_query {
                    println!("bot> SQL: {sql}");
                }
                for job in &reply.jobs {
                    println!("bot>   {} | {} | {}", job.title, job.company, job.location);
                }
                if let Some(text) = &reply.text {
                    println!("bot> {text}");
                }
                if reply.graph.is_some() {
                    println!("bot> (graph attached)");
                }
            }
            ChatEntry::Error { text } => println!("bot> {text}"),
        }
    }
    if view.chat.pending {
        println!("bot> ...");
    }
}

fn render_feed_section(title: &str, jobs: &[jobscout_core::JobCardView]) {
    if jobs.is_empty() {
        return;
    }
    println!("{title}:");
    for job in jobs {
        println!("  {} | {} | {}", job.title, job.company, job.salary_line);
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
