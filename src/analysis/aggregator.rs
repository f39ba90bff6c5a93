//! Blog aggregation and statistics.
//!
//! This module provides pure reductions over a snapshot of blog records.
//! Ties are always resolved in favour of whatever comes first: the earlier
//! record for [`favorite_blog`], the earlier first-seen author for
//! [`most_blogs`] and [`most_likes`].

use crate::models::{AuthorBlogs, AuthorLikes, AuthorSummary, BlogRecord, BlogStats};
use indexmap::IndexMap;

/// Sum of likes across all records.
pub fn total_likes(blogs: &[BlogRecord]) -> u64 {
    blogs.iter().map(|b| b.likes).sum()
}

/// The record with the most likes, or `None` for an empty slice.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<&BlogRecord> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(current) if blog.likes <= current.likes => Some(current),
        _ => Some(blog),
    })
}

/// Number of blogs per author, in first-seen order.
pub fn blogs_by_author(blogs: &[BlogRecord]) -> IndexMap<Option<&str>, usize> {
    let mut grouped: IndexMap<Option<&str>, usize> = IndexMap::new();

    for blog in blogs {
        *grouped.entry(blog.author.as_deref()).or_default() += 1;
    }

    grouped
}

/// Cumulative likes per author, in first-seen order.
pub fn likes_by_author(blogs: &[BlogRecord]) -> IndexMap<Option<&str>, u64> {
    let mut grouped: IndexMap<Option<&str>, u64> = IndexMap::new();

    for blog in blogs {
        *grouped.entry(blog.author.as_deref()).or_default() += blog.likes;
    }

    grouped
}

/// The author with the most blogs, or `None` for an empty slice.
pub fn most_blogs(blogs: &[BlogRecord]) -> Option<AuthorBlogs> {
    first_max(blogs_by_author(blogs)).map(|(author, blogs)| AuthorBlogs {
        author: author.map(String::from),
        blogs,
    })
}

/// The author with the most cumulative likes, or `None` for an empty slice.
pub fn most_likes(blogs: &[BlogRecord]) -> Option<AuthorLikes> {
    first_max(likes_by_author(blogs)).map(|(author, likes)| AuthorLikes {
        author: author.map(String::from),
        likes,
    })
}

/// Blog count and likes for every author, in first-seen order.
pub fn author_summaries(blogs: &[BlogRecord]) -> Vec<AuthorSummary> {
    let mut grouped: IndexMap<Option<&str>, AuthorSummary> = IndexMap::new();

    for blog in blogs {
        let author = blog.author.as_deref();
        let summary = grouped.entry(author).or_insert_with(|| AuthorSummary {
            author: author.map(String::from),
            blogs: 0,
            likes: 0,
        });
        summary.blogs += 1;
        summary.likes += blog.likes;
    }

    grouped.into_values().collect()
}

/// Compute every statistic over the same snapshot.
pub fn blog_stats(blogs: &[BlogRecord]) -> BlogStats {
    BlogStats {
        blog_count: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs).cloned(),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}

/// Scan in iteration order, replacing the best entry only on a strictly
/// greater value.
fn first_max<K, V: Ord>(grouped: IndexMap<K, V>) -> Option<(K, V)> {
    let mut best: Option<(K, V)> = None;

    for (key, value) in grouped {
        let replace = match &best {
            Some((_, current)) => value > *current,
            None => true,
        };
        if replace {
            best = Some((key, value));
        }
    }

    best
}
