use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, Rgb, RgbImage};
use tempfile::TempDir;

use namesake_application::FavoritesService;
use namesake_core::name::{GeneratedName, Gender, GenerationRequest, Nationality};
use namesake_core::person::{FavoriteQuery, IconTint, Person, PersonDetails};
use namesake_infrastructure::FileFavoriteRepository;

async fn open(dir: &TempDir) -> FavoritesService {
    let repo = Arc::new(FileFavoriteRepository::with_base_path(dir.path().to_path_buf()));
    FavoritesService::new(repo).await.unwrap()
}

fn person(first: &str, last: &str) -> Person {
    Person::new(first, last, Gender::Female, Nationality::German)
}

fn png(color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb(color));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

#[tokio::test]
async fn favorites_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let anna = {
        let service = open(&dir).await;
        let mut anna = service.add_favorite(person("Anna", "Bauer")).await.unwrap();
        anna.add_tag("hero");
        anna.notes = "Knows the baker".to_string();
        assert!(service.update_person(anna.clone()).await.unwrap());
        anna
    };

    let service = open(&dir).await;
    let favorites = service.list_favorites().await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, anna.id);
    assert_eq!(favorites[0].notes, "Knows the baker");
    assert!(favorites[0].has_tag("hero"));
    assert!(favorites[0].favorited_at.is_some());
}

#[tokio::test]
async fn remove_touches_only_the_given_id() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let anna = service.add_favorite(person("Anna", "Bauer")).await.unwrap();
    let lena = service.add_favorite(person("Lena", "Klein")).await.unwrap();

    assert!(service.remove_favorite(anna.id).await.unwrap());
    assert!(!service.remove_favorite(anna.id).await.unwrap());

    let remaining = open(&dir).await.list_favorites().await;
    assert_eq!(remaining, vec![lena]);
}

#[tokio::test]
async fn toggle_adds_then_removes() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let request = GenerationRequest::new(Gender::Male, Nationality::British, "1980");
    let generated: Person = GeneratedName::new("Oliver", "Smith", request).into();

    let added = service.toggle_favorite(generated.clone()).await.unwrap();
    assert!(added.is_some());
    assert!(service.is_favorite(generated.id).await);

    let removed = service.toggle_favorite(generated.clone()).await.unwrap();
    assert!(removed.is_none());
    assert!(service.list_favorites().await.is_empty());
}

#[tokio::test]
async fn details_are_created_on_first_access_and_persisted() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let stranger = person("Ida", "Vogel");

    assert!(service.load_details(stranger.id).await.unwrap().is_empty());

    let details = PersonDetails {
        age: "34".to_string(),
        wants: "A garden".to_string(),
        ..PersonDetails::default()
    };
    service.save_details(stranger.id, details.clone()).await.unwrap();

    let reopened = open(&dir).await;
    assert_eq!(reopened.load_details(stranger.id).await.unwrap(), details);
}

#[tokio::test]
async fn remove_all_clears_favorites_and_details() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let anna = service.add_favorite(person("Anna", "Bauer")).await.unwrap();
    service
        .save_details(
            anna.id,
            PersonDetails {
                needs: "Sleep".to_string(),
                ..PersonDetails::default()
            },
        )
        .await
        .unwrap();

    service.remove_all_favorites().await.unwrap();

    let reopened = open(&dir).await;
    assert!(reopened.list_favorites().await.is_empty());
    assert!(reopened.load_details(anna.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn tags_and_queries() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;

    for (first, last, tags) in [
        ("Lena", "Klein", vec!["hero"]),
        ("Anna", "Bauer", vec!["mentor", "hero"]),
        ("Ida", "Vogel", vec![]),
    ] {
        let mut p = person(first, last);
        for tag in tags {
            p.add_tag(tag);
        }
        service.add_favorite(p).await.unwrap();
    }

    assert_eq!(service.all_tags().await, vec!["hero", "mentor"]);
    let heroes: Vec<String> = service
        .persons_with_tag("hero")
        .await
        .into_iter()
        .map(|p| p.first_name)
        .collect();
    assert_eq!(heroes, vec!["Lena", "Anna"]);

    let sorted: Vec<String> = service
        .query(&FavoriteQuery::new().with_tag("hero"))
        .await
        .into_iter()
        .map(|p| p.first_name)
        .collect();
    assert_eq!(sorted, vec!["Anna", "Lena"]);

    let found = service.query(&FavoriteQuery::new().with_search("VOG")).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Ida");
}

#[tokio::test]
async fn images_are_stored_as_jpeg_and_tinted() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let anna = service.add_favorite(person("Anna", "Bauer")).await.unwrap();

    assert_eq!(service.image_tint(anna.id).await.unwrap(), None);

    let updated = service.save_image(anna.id, png([250, 250, 250])).await.unwrap();
    let stored = updated.image_data.unwrap();
    assert_eq!(image::guess_format(&stored).unwrap(), ImageFormat::Jpeg);
    assert_eq!(
        service.image_tint(anna.id).await.unwrap(),
        Some(IconTint::Dark)
    );

    service.save_image(anna.id, png([5, 5, 5])).await.unwrap();
    assert_eq!(
        service.image_tint(anna.id).await.unwrap(),
        Some(IconTint::Light)
    );

    let cleared = service.delete_image(anna.id).await.unwrap();
    assert!(!cleared.has_image());
    assert!(!open(&dir).await.get(anna.id).await.unwrap().has_image());
}

#[tokio::test]
async fn export_uses_person_name_for_file() {
    let dir = TempDir::new().unwrap();
    let service = open(&dir).await;
    let anna = service.add_favorite(person("Anna", "Bauer")).await.unwrap();
    service
        .save_details(
            anna.id,
            PersonDetails {
                age: "34".to_string(),
                notes: "Knows the baker".to_string(),
                ..PersonDetails::default()
            },
        )
        .await
        .unwrap();

    let export = service.export_details(anna.id).await.unwrap();
    assert_eq!(export.file_name, "Person_Anna_Bauer.txt");
    assert!(export.content.starts_with("Anna Bauer\n\n\n"));
    assert!(export.content.contains("Alter:\n34\n"));
    assert!(export.content.ends_with("Notizen:\nKnows the baker\n"));
}
