/// A named, parametrized catalog query. The endpoint is an opaque filter
/// expression appended to the catalog base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: &'static str,
    pub endpoint: &'static str,
}

/// The fixed home-screen row list, in display order.
pub fn movie_categories() -> &'static [Category] {
    const CATEGORIES: &[Category] = &[
        Category {
            title: "Trending Now",
            endpoint: "/trending/movie/week",
        },
        Category {
            title: "Top Rated",
            endpoint: "/movie/top_rated",
        },
        Category {
            title: "Action Movies",
            endpoint: "/discover/movie?with_genres=28",
        },
        Category {
            title: "Comedy Movies",
            endpoint: "/discover/movie?with_genres=35",
        },
        Category {
            title: "Horror Movies",
            endpoint: "/discover/movie?with_genres=27",
        },
        Category {
            title: "Romance Movies",
            endpoint: "/discover/movie?with_genres=10749",
        },
        Category {
            title: "Documentaries",
            endpoint: "/discover/movie?with_genres=99",
        },
        Category {
            title: "Sci-Fi Movies",
            endpoint: "/discover/movie?with_genres=878",
        },
    ];
    CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_list_order_is_fixed() {
        let titles: Vec<&str> = movie_categories().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Trending Now",
                "Top Rated",
                "Action Movies",
                "Comedy Movies",
                "Horror Movies",
                "Romance Movies",
                "Documentaries",
                "Sci-Fi Movies",
            ]
        );
    }

    #[test]
    fn test_genre_filtered_categories_carry_query_strings() {
        let action = movie_categories()
            .iter()
            .find(|c| c.title == "Action Movies")
            .unwrap();
        assert_eq!(action.endpoint, "/discover/movie?with_genres=28");
    }
}
