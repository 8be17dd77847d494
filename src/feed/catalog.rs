//! Static sample catalog.

use crate::models::{Category, Comment, Country, NewsItem};

/// Read-only set of news items with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<NewsItem>,
}

impl Catalog {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// The built-in sample news.
    pub fn sample() -> Self {
        Self::new(sample_news())
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

fn comment(id: &str, text: &str, author: &str, timestamp: &str) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        author: author.to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn sample_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "tech-1".to_string(),
            title: "New AI Breakthrough in Natural Language Processing".to_string(),
            description: "Researchers have developed a new model that can understand and generate human-like text with unprecedented accuracy.".to_string(),
            source: "Tech News".to_string(),
            publisher: "Sarah Chen".to_string(),
            category: Category::Technology,
            country: Country::USA,
            publish_time: "2 hours ago".to_string(),
            image: Some("https://images.unsplash.com/photo-1584735935682-2f2b69dff9d2?w=800&auto=format&fit=crop&q=60".to_string()),
            initial_upvotes: 42,
            initial_downvotes: 3,
            comments: vec![
                comment("1", "This is amazing! Can't wait to see how this technology evolves.", "Tech Enthusiast", "1 hour ago"),
                comment("2", "I'm curious about the potential applications in healthcare.", "Medical Professional", "30 minutes ago"),
            ],
        },
        NewsItem {
            id: "sports-1".to_string(),
            title: "Local Team Wins Championship".to_string(),
            description: "In an exciting match that went into overtime, the local team secured their first championship in 10 years.".to_string(),
            source: "Sports Daily".to_string(),
            publisher: "Michael Rodriguez".to_string(),
            category: Category::Sports,
            country: Country::UK,
            publish_time: "5 hours ago".to_string(),
            image: Some("https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800&auto=format&fit=crop&q=60".to_string()),
            initial_upvotes: 89,
            initial_downvotes: 5,
            comments: vec![
                comment("3", "What a game! The team really deserved this win.", "Sports Fan", "4 hours ago"),
                comment("4", "The overtime was intense! Great performance by both teams.", "Basketball Coach", "3 hours ago"),
            ],
        },
        NewsItem {
            id: "politics-1".to_string(),
            title: "New Legislation Proposed to Address Climate Change".to_string(),
            description: "Lawmakers have introduced a comprehensive bill aimed at reducing carbon emissions and promoting renewable energy.".to_string(),
            source: "Politics Today".to_string(),
            publisher: "Emma Thompson".to_string(),
            category: Category::Politics,
            country: Country::Canada,
            publish_time: "1 day ago".to_string(),
            image: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&auto=format&fit=crop&q=60".to_string()),
            initial_upvotes: 156,
            initial_downvotes: 23,
            comments: vec![
                comment("5", "Finally, some concrete action on climate change!", "Environmental Activist", "20 hours ago"),
                comment("6", "I hope this bill gets the support it needs.", "Concerned Citizen", "18 hours ago"),
            ],
        },
        NewsItem {
            id: "ent-1".to_string(),
            title: "New Blockbuster Movie Breaks Box Office Records".to_string(),
            description: "The latest superhero movie has shattered previous box office records, becoming the highest-grossing film of the year.".to_string(),
            source: "Entertainment Weekly".to_string(),
            publisher: "James Wilson".to_string(),
            category: Category::Entertainment,
            country: Country::Australia,
            publish_time: "3 hours ago".to_string(),
            image: Some("https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=800&auto=format&fit=crop&q=60".to_string()),
            initial_upvotes: 210,
            initial_downvotes: 12,
            comments: vec![
                comment("7", "The special effects were mind-blowing!", "Movie Buff", "2 hours ago"),
                comment("8", "I've already watched it twice!", "Film Critic", "1 hour ago"),
            ],
        },
    ]
}
