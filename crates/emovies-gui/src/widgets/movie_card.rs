use iced::widget::{column, container, text};
use iced::{Element, Length};

use emovies_core::MovieCard;

use crate::poster_cache::{self, PosterCache};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster plus the card's inner padding.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// Grid card: poster, media type, title (two lines max) and year.
pub fn movie_card<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    card: &'a MovieCard,
) -> Element<'a, Message> {
    let cover = widgets::poster(
        cs,
        posters,
        poster_cache::cache_key(card),
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    let type_label = text(card.type_label.as_str())
        .size(style::TEXT_XS)
        .color(cs.primary)
        .line_height(style::LINE_HEIGHT_LOOSE);

    // Clipped to two lines via container height
    let title = container(
        text(card.title.as_str())
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_LG * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let year = text(card.year.as_str())
        .size(style::TEXT_SM)
        .color(cs.on_surface_variant)
        .line_height(style::LINE_HEIGHT_LOOSE);

    let details = column![type_label, title, year].spacing(style::SPACE_XXS);

    container(
        column![cover, details]
            .spacing(style::SPACE_SM)
            .width(Length::Fixed(style::POSTER_WIDTH)),
    )
    .padding(style::SPACE_SM)
    .width(Length::Fixed(CARD_WIDTH))
    .style(theme::movie_card(cs))
    .into()
}
