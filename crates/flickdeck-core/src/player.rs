use flickdeck_models::{Movie, Video};

/// Pick the trailer to embed: the first YouTube-hosted video of type
/// "Trailer", in provider order. `official` is not required.
pub fn select_trailer(movie: &Movie) -> Option<&Video> {
    movie
        .videos
        .as_ref()?
        .results
        .iter()
        .find(|v| v.site == "YouTube" && v.kind == "Trailer")
}

/// Embed URL for a third-party video frame.
pub fn embed_url(video: &Video) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&controls=0",
        video.key
    )
}

/// What the simulated player shows: an embedded trailer frame when one
/// exists, otherwise a static fallback. There is no real media pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScreen {
    pub title: String,
    pub embed_url: Option<String>,
}

impl PlayerScreen {
    pub fn for_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            embed_url: select_trailer(movie).map(embed_url),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.embed_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flickdeck_models::VideoList;

    fn video(key: &str, site: &str, kind: &str) -> Video {
        Video {
            id: key.to_string(),
            key: key.to_string(),
            name: format!("{} video", kind),
            site: site.to_string(),
            kind: kind.to_string(),
            official: false,
        }
    }

    fn movie_with_videos(videos: Vec<Video>) -> Movie {
        Movie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            genre_ids: Vec::new(),
            genres: None,
            runtime: None,
            videos: Some(VideoList { results: videos }),
        }
    }

    #[test]
    fn test_select_trailer_prefers_first_youtube_trailer() {
        let movie = movie_with_videos(vec![
            video("clip1", "YouTube", "Clip"),
            video("vimeo1", "Vimeo", "Trailer"),
            video("trailer1", "YouTube", "Trailer"),
            video("trailer2", "YouTube", "Trailer"),
        ]);

        let trailer = select_trailer(&movie).unwrap();
        assert_eq!(trailer.key, "trailer1");
    }

    #[test]
    fn test_embed_url_shape() {
        let v = video("vKQi3bBA1y8", "YouTube", "Trailer");
        assert_eq!(
            embed_url(&v),
            "https://www.youtube.com/embed/vKQi3bBA1y8?autoplay=1&controls=0"
        );
    }

    #[test]
    fn test_player_falls_back_without_trailer() {
        let movie = movie_with_videos(vec![video("clip1", "YouTube", "Clip")]);
        let screen = PlayerScreen::for_movie(&movie);
        assert!(screen.is_fallback());

        let mut no_videos = movie_with_videos(vec![]);
        no_videos.videos = None;
        assert!(PlayerScreen::for_movie(&no_videos).is_fallback());
    }
}
