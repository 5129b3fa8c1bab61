use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length};

use emovies_api::SearchOutcome;
use emovies_core::{MovieCard, Query, SearchController, SearchTicket, SearchView};

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// Search screen state.
pub struct Search {
    input: String,
    controller: SearchController,
    /// Derived from the controller state after every transition.
    view: SearchView,
    placeholder_poster: String,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    ClearInput,
    Retry,
    ResultsLoaded(SearchTicket, Result<SearchOutcome, String>),
}

// ── Implementation ────────────────────────────────────────────────

impl Search {
    pub fn new(seed: Query, placeholder_poster: String) -> Self {
        let controller = SearchController::new(seed);
        let view = SearchView::derive(controller.state(), &placeholder_poster);
        Self {
            input: String::new(),
            controller,
            view,
            placeholder_poster,
        }
    }

    /// Kick off a search without going through the input box (startup seed).
    pub fn start(&mut self, query: Query) -> Action {
        let ticket = self.controller.begin(query);
        self.fetch(ticket)
    }

    pub fn cards(&self) -> &[MovieCard] {
        &self.view.cards
    }

    pub fn status_line(&self) -> String {
        self.view.status_line()
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::InputChanged(value) => {
                self.input = value;
                Action::None
            }
            Message::ClearInput => {
                self.input.clear();
                Action::None
            }
            Message::Submit => match self.controller.submit(&self.input) {
                Some(ticket) => self.fetch(ticket),
                None => Action::None,
            },
            Message::Retry => {
                let query = self.controller.state().query.clone();
                self.start(query)
            }
            Message::ResultsLoaded(ticket, result) => {
                if self.controller.complete(ticket, result) {
                    self.refresh();
                    Action::LoadPosters
                } else {
                    Action::None
                }
            }
        }
    }

    fn fetch(&mut self, ticket: SearchTicket) -> Action {
        self.refresh();
        Action::Fetch {
            ticket,
            query: self.controller.state().query.to_string(),
        }
    }

    fn refresh(&mut self) {
        self.view = SearchView::derive(self.controller.state(), &self.placeholder_poster);
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, posters: &'a PosterCache) -> Element<'a, Message> {
        let header = self.header(cs);

        let mut body = column![]
            .spacing(style::SPACE_LG)
            .padding([style::SPACE_LG, style::SPACE_XL])
            .width(Length::Fill)
            .height(Length::Fill);

        if self.view.loading {
            body = body.push(
                container(
                    text("Loading...")
                        .size(style::TEXT_BASE)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                )
                .width(Length::Fill)
                .center_x(Length::Fill),
            );
        }

        if let Some(notice) = &self.view.notice {
            body = body.push(self.notice(cs, notice));
        }

        if !self.view.cards.is_empty() {
            let cards: Vec<Element<'a, Message>> = self
                .view
                .cards
                .iter()
                .map(|card| widgets::movie_card(cs, posters, card))
                .collect();

            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_XL)
                .line_spacing(style::SPACE_XL);

            body = body.push(
                widgets::styled_scrollable(container(wrap).width(Length::Fill), cs)
                    .height(Length::Fill),
            );
        } else if !self.view.loading && self.view.notice.is_none() {
            body = body.push(widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "No movies yet",
                "Search any title to fill the grid.",
            ));
        }

        column![header, rule::horizontal(1), body]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Brand on the left, search bar centered.
    fn header<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let brand = text("EMovies")
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .color(cs.primary)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let search_input = text_input("Search any movies", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submit)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.input.is_empty() {
            search_row = search_row.push(self.icon_button(
                cs,
                lucide_icons::iced::icon_x()
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
                style::TEXT_SM,
                Message::ClearInput,
            ));
        }

        search_row = search_row.push(self.icon_button(
            cs,
            lucide_icons::iced::icon_search()
                .size(style::TEXT_BASE)
                .color(cs.on_surface_variant),
            style::TEXT_BASE,
            Message::Submit,
        ));

        let search_bar = container(search_row)
            .style(theme::search_bar(cs, self.view.loading))
            .padding([style::SPACE_XS, style::SPACE_MD])
            .max_width(style::SEARCH_BAR_MAX_WIDTH)
            .width(Length::Fill);

        let header = row![
            brand,
            container(search_bar)
                .width(Length::Fill)
                .center_x(Length::Fill),
        ]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Center)
        .padding([style::SPACE_SM, style::SPACE_XL]);

        container(header)
            .style(theme::header_bg(cs))
            .width(Length::Fill)
            .height(Length::Fixed(style::HEADER_HEIGHT))
            .center_y(Length::Fixed(style::HEADER_HEIGHT))
            .into()
    }

    fn icon_button<'a>(
        &self,
        cs: &ColorScheme,
        icon: iced::widget::Text<'a>,
        icon_size: f32,
        on_press: Message,
    ) -> Element<'a, Message> {
        let size = icon_size + style::SPACE_XS * 2.0;
        button(
            container(icon)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(on_press)
        .padding(0)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(theme::icon_button(cs))
        .into()
    }

    fn notice<'a>(&self, cs: &ColorScheme, notice: &'a str) -> Element<'a, Message> {
        let content = row![
            text(notice)
                .size(style::TEXT_BASE)
                .color(cs.error)
                .line_height(style::LINE_HEIGHT_NORMAL),
            button(text("Retry").size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::Retry)
                .style(theme::ghost_button(cs)),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center);

        container(
            container(content)
                .padding([style::SPACE_SM, style::SPACE_LG])
                .style(theme::error_notice(cs)),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }
}
