//! Mapping Benchmark: derived adapters vs hand-written conversion
//!
//! Measures the cost of name-based mapping against a plain field-by-field
//! conversion of the same shapes.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package propmap
//!
//! # Run a single group
//! cargo bench --package propmap -- map/single
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use propmap::{map, map_all, ConstructorSelection, MapAllInto, MapInto, Mappable, Mapper, MapperOptions};
use std::time::Duration;

// ============================================================================
// Test Data Structures
// ============================================================================

#[derive(Mappable, Debug, Clone)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub email_verified: bool,
    pub avatar_url: Option<String>,
    pub last_login_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Mappable, Debug, Clone, Default)]
#[mapper(default)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub email_verified: bool,
    pub avatar_url: Option<String>,
    pub created_at: i64,
}

#[derive(Mappable, Debug, Clone)]
#[mapper(constructor = new(id: String, username: String, email: String), default)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl Default for UserSummary {
    fn default() -> Self {
        Self::new(String::new(), String::new(), String::new())
    }
}

impl UserSummary {
    pub fn new(id: String, username: String, email: String) -> Self {
        Self { id, username, email }
    }
}

impl UserData {
    fn sample() -> Self {
        Self {
            id: "01918f8a-4c5b-7d8e-9f0a-1b2c3d4e5f6a".to_string(),
            username: "john.doe".to_string(),
            email: "john.doe@example.com".to_string(),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            role: "User".to_string(),
            email_verified: true,
            avatar_url: Some("https://example.com/avatars/john.jpg".to_string()),
            last_login_at: Some(1_703_980_800),
            created_at: 1_703_894_400,
        }
    }

    fn sample_list(count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let mut user = Self::sample();
                user.id = format!("01918f8a-4c5b-7d8e-9f0a-1b2c3d4e5f{i:02x}");
                user.username = format!("user_{i}");
                user.email = format!("user_{i}@example.com");
                user
            })
            .collect()
    }

    fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            email_verified: self.email_verified,
            avatar_url: self.avatar_url.clone(),
            created_at: self.created_at,
        }
    }
}

// ============================================================================
// Single Object Benchmarks
// ============================================================================

fn benchmark_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("map/single");
    let user = UserData::sample();
    group.throughput(Throughput::Elements(1));

    group.bench_function("manual", |b| b.iter(|| black_box(black_box(&user).to_response())));

    group.bench_function("default_constructor", |b| {
        b.iter(|| {
            let response: Option<UserResponse> = map(Some(black_box(&user)), None).unwrap();
            black_box(response)
        })
    });

    group.bench_function("existing_target", |b| {
        b.iter(|| {
            let response = user.map_onto(UserResponse::default()).unwrap();
            black_box(response)
        })
    });

    group.bench_function("parameterized_constructor", |b| {
        b.iter(|| {
            let summary: UserSummary = black_box(&user).map_into().unwrap();
            black_box(summary)
        })
    });

    let most_resolvable = Mapper::new(
        MapperOptions::default().with_constructor_selection(ConstructorSelection::MostResolvable),
    );
    group.bench_function("most_resolvable", |b| {
        b.iter(|| {
            let summary: Option<UserSummary> =
                most_resolvable.map(Some(black_box(&user)), None).unwrap();
            black_box(summary)
        })
    });

    group.finish();
}

// ============================================================================
// Collection Benchmarks
// ============================================================================

fn benchmark_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("map/collection");

    for count in [10, 100, 1000] {
        let users = UserData::sample_list(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("manual", count), &users, |b, users| {
            b.iter(|| {
                let responses: Vec<UserResponse> = users.iter().map(UserData::to_response).collect();
                black_box(responses)
            })
        });

        group.bench_with_input(BenchmarkId::new("map_all_into", count), &users, |b, users| {
            b.iter(|| {
                let responses: Vec<UserResponse> = users.map_all_into().unwrap();
                black_box(responses)
            })
        });

        group.bench_with_input(BenchmarkId::new("map_all", count), &users, |b, users| {
            b.iter(|| {
                let responses = map_all(
                    Some(users.iter().map(Some)),
                    None::<Vec<Option<UserResponse>>>,
                )
                .unwrap();
                black_box(responses)
            })
        });
    }

    group.finish();
}

criterion_group!(
    name = single_benches;
    config = Criterion::default()
        .sample_size(500)
        .measurement_time(Duration::from_secs(5));
    targets = benchmark_single
);

criterion_group!(
    name = collection_benches;
    config = Criterion::default()
        .sample_size(100);
    targets = benchmark_collections
);

criterion_main!(single_benches, collection_benches);
