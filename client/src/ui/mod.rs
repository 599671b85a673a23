//! # GUI Rendering Framework
//!
//! This module contains the complete UI rendering pipeline using **egui
//! widgets**: the chat screen, reusable widgets, and the theme.

pub mod screens;
pub mod theme;
pub mod widgets;
