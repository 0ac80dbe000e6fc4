use crate::hex::{format_rgb8, parse_rgb8};
use anyhow::Result;
use palette::rgb::Rgb;
use std::marker::PhantomData;

pub use crate::re_export::Color;

pub const fn rgb(red: f32, green: f32, blue: f32) -> Color {
    Color { color: Rgb { red, green, blue, standard: PhantomData }, alpha: 1. }
}

pub fn channel_to_f32(channel: u8) -> f32 { channel as f32 / 255. }

pub fn channel_to_u8(channel: f32) -> u8 { (channel.max(0.).min(1.) * 255.).round() as u8 }

pub fn parse_color(hex: &str) -> Result<Color> {
    let [red, green, blue] = parse_rgb8(hex)?;
    Ok(rgb(channel_to_f32(red), channel_to_f32(green), channel_to_f32(blue)))
}

/// Quantizes to 8 bit per channel, alpha is dropped.
pub fn to_hex(color: &Color) -> String {
    let Rgb { red, green, blue, .. } = color.color;
    format_rgb8([channel_to_u8(red), channel_to_u8(green), channel_to_u8(blue)])
}
