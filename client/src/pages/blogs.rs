//! Static editorial list of external blog posts.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use leptos::prelude::*;

use crate::components::layout::HomeLayout;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogEntry {
    pub title: &'static str,
    pub author: &'static str,
    pub views: u32,
    pub href: &'static str,
}

pub const BLOGS: [BlogEntry; 3] = [
    BlogEntry {
        title: "Two Sum",
        author: "GFG",
        views: 525,
        href: "https://www.geeksforgeeks.org/check-if-pair-with-given-sum-exists-in-array/",
    },
    BlogEntry {
        title: "Coin Change",
        author: "GFG",
        views: 201,
        href: "https://www.geeksforgeeks.org/coin-change-dp-7/",
    },
    BlogEntry {
        title: "Cumulative Sum",
        author: "WorkTech",
        views: 652,
        href: "https://workat.tech/problem-solving/approach/cs/cumulative-sum",
    },
];

#[component]
pub fn BlogsPage(session: RwSignal<Session>) -> impl IntoView {
    view! {
        <HomeLayout session>
            <section class="blog-list">
                <h2 class="page-title">"Blog Page"</h2>
                <div class="blog-list__grid">
                    {BLOGS
                        .into_iter()
                        .map(|blog| {
                            view! {
                                <div class="blog-card">
                                    <h3 class="blog-card__title">{blog.title}</h3>
                                    <p class="blog-card__author">{format!("Author: {}", blog.author)}</p>
                                    <div class="blog-card__info">
                                        <span>{format!("Views: {}", blog.views)}</span>
                                        <a href=blog.href target="_blank" rel="noopener noreferrer" title="Open">
                                            "\u{2197}"
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </HomeLayout>
    }
}
