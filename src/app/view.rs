// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.

use super::{Message, Tile};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::remote_image::RemoteImage;
use crate::ui::sizing::SizingSpec;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

pub fn view<'a>(tiles: &'a [Tile], sizing_spec: &SizingSpec) -> Element<'a, Message> {
    if tiles.is_empty() {
        return container(text("Pass one or more image URLs on the command line."))
            .center(Length::Fill)
            .into();
    }

    let config = RemoteImage::new()
        .sizing(*sizing_spec)
        .placeholder(placeholder)
        .on_error(|message| {
            text(message.to_owned())
                .color(palette::ERROR_500)
                .width(Length::Fixed(sizing::TILE))
                .into()
        });

    let cards = tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| view_tile(index, tile, &config));

    scrollable(
        Row::with_children(cards)
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .wrap(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_tile<'a>(
    index: usize,
    tile: &'a Tile,
    config: &RemoteImage<'a, Message>,
) -> Element<'a, Message> {
    let mut reload = button(text("Reload").size(sizing::ICON_MD / 2.0));
    if !tile.state.is_loading() {
        reload = reload.on_press(Message::Reload(index));
    }

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::TILE))
        .push(config.view(&tile.state))
        .push(
            text(tile.url.as_str())
                .size(sizing::ICON_MD / 2.0)
                .color(palette::GRAY_400),
        )
        .push(reload)
        .into()
}

fn placeholder<'a>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(palette::GRAY_100.into()),
            ..container::Style::default()
        })
        .into()
}
