//! Page assembly: combining fetched content and local data stores into the
//! typed page models the render layer consumes.
//!
//! Two assembly variants exist. The blog overview is the remote-fetch
//! variant: one API query, then grouping, then the metadata lookup - in
//! that order. The accommodations listing is the static-data variant: pure
//! lookups over JSON loaded from disk. Either way a page whose path has no
//! metadata entry gets `metadata: None`; rendering tolerates that.

use crate::content::{ApiError, BlogPost, ContentClient, GroupedPosts, group_posts};
use crate::data::{AccommodationIndex, MetadataStore, PageMetadata};

/// The destination index: all fetched entries grouped by destination.
#[derive(Debug, Clone)]
pub struct BlogOverviewPage {
    pub route: String,
    pub grouped: GroupedPosts,
    pub metadata: Option<PageMetadata>,
}

/// One blog entry page.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub route: String,
    pub post: BlogPost,
    pub metadata: Option<PageMetadata>,
}

/// The accommodations listing page.
#[derive(Debug, Clone)]
pub struct AccommodationsPage {
    pub route: String,
    pub index: AccommodationIndex,
    pub metadata: Option<PageMetadata>,
}

/// Every page of the assembled site.
#[derive(Debug, Clone)]
pub struct Site {
    pub overview: BlogOverviewPage,
    pub posts: Vec<PostPage>,
    pub accommodations: AccommodationsPage,
}

/// Borrowed reference to one page, for route dispatch.
#[derive(Debug, Clone, Copy)]
pub enum PageRef<'a> {
    Overview(&'a BlogOverviewPage),
    Post(&'a PostPage),
    Accommodations(&'a AccommodationsPage),
}

impl Site {
    /// All routes, overview first.
    pub fn routes(&self) -> Vec<&str> {
        let mut routes = Vec::with_capacity(self.posts.len() + 2);
        routes.push(self.overview.route.as_str());
        routes.extend(self.posts.iter().map(|p| p.route.as_str()));
        routes.push(self.accommodations.route.as_str());
        routes
    }

    /// Find the page for a route, if any.
    pub fn get(&self, route: &str) -> Option<PageRef<'_>> {
        if route == self.overview.route {
            return Some(PageRef::Overview(&self.overview));
        }
        if route == self.accommodations.route {
            return Some(PageRef::Accommodations(&self.accommodations));
        }
        self.posts
            .iter()
            .find(|p| p.route == route)
            .map(PageRef::Post)
    }
}

/// Join a page route onto a base route.
fn join_route(base: &str, slug: &str) -> String {
    format!("{}/{slug}", base.trim_end_matches('/'))
}

/// Build the overview page from already-fetched records.
pub fn overview_from_records(
    records: Vec<BlogPost>,
    metadata: &MetadataStore,
    route: &str,
) -> BlogOverviewPage {
    let grouped = group_posts(records);
    BlogOverviewPage {
        route: route.to_owned(),
        grouped,
        metadata: metadata.lookup(route).cloned(),
    }
}

/// Remote-fetch assembly: query the content API, then group, then look up
/// metadata. A failed query propagates and fails the whole build.
pub fn assemble_blog_overview(
    client: &ContentClient,
    metadata: &MetadataStore,
    route: &str,
) -> Result<BlogOverviewPage, ApiError> {
    let records = client.fetch_posts()?;
    Ok(overview_from_records(records, metadata, route))
}

/// Derive one entry page per grouped post. Routes live under the overview
/// route; their metadata entries usually do not exist, which is fine.
pub fn derive_post_pages(overview: &BlogOverviewPage, metadata: &MetadataStore) -> Vec<PostPage> {
    overview
        .grouped
        .posts()
        .map(|post| {
            let route = join_route(&overview.route, &post.route_slug());
            PostPage {
                metadata: metadata.lookup(&route).cloned(),
                route,
                post: post.clone(),
            }
        })
        .collect()
}

/// Static-data assembly for the accommodations listing.
pub fn assemble_accommodations(
    index: AccommodationIndex,
    metadata: &MetadataStore,
    route: &str,
) -> AccommodationsPage {
    AccommodationsPage {
        route: route.to_owned(),
        metadata: metadata.lookup(route).cloned(),
        index,
    }
}

/// Assemble the full site: one fetch, every page.
pub fn assemble_site(
    client: &ContentClient,
    metadata: &MetadataStore,
    accommodations: AccommodationIndex,
    destination_route: &str,
    accommodations_route: &str,
) -> Result<Site, ApiError> {
    let overview = assemble_blog_overview(client, metadata, destination_route)?;
    let posts = derive_post_pages(&overview, metadata);
    let accommodations = assemble_accommodations(accommodations, metadata, accommodations_route);

    Ok(Site {
        overview,
        posts,
        accommodations,
    })
}
