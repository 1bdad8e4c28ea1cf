//! The library code for the `rubric` category page expander. Given a
//! site's category→posts mapping, the crate produces one page descriptor
//! per (category, output type) pair whose layout is configured, and
//! leaves rendering to the host site builder. The flow can be broken
//! down into three distinct steps:
//!
//! 1. Loading the category knobs from the site configuration
//!    ([`crate::config`])
//! 2. Expanding categories into page descriptors ([`crate::expand`])
//! 3. Handing the descriptors to the host's renderer (the host's job,
//!    not ours)
//!
//! The second step is the involved one. For each category and each
//! output type (a browsing page and a syndication feed), the expander
//! assembles a template payload (posts sorted newest-first, the category
//! name, any extra static data), derives a URL-safe slug for the
//! category ([`crate::slug`]), asks the layout registry
//! ([`crate::layout`]) for the template's file extension, and computes
//! the target path according to the site's pretty-URL setting.
//!
//! Alongside the expander lives the post-link filter ([`crate::filter`]),
//! which resolves a post source path into its public URL through a
//! host-provided [`crate::resolve::PostUrlResolver`].

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod expand;
pub mod filter;
pub mod layout;
pub mod post;
pub mod resolve;
pub mod slug;
pub mod value;
