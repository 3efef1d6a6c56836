use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use file_index::boundary::HostBoundary;
use file_index::catalog::SqliteCatalog;
use file_index::db;
use file_index::owner::{platform_resolver, OwnerResolver, UnsupportedOwners};
use file_index::walker::index_roots;
use sqlx::sqlite::SqlitePoolOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::runtime::Runtime;

fn create_test_tree(depth: usize, files_per_dir: usize, dirs_per_level: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    fn create_level(
        path: &Path,
        current_depth: usize,
        max_depth: usize,
        files_per_dir: usize,
        dirs_per_level: usize,
    ) {
        if current_depth >= max_depth {
            return;
        }

        for i in 0..files_per_dir {
            let ext = ["txt", "png", "pdf", "xyz"][i % 4];
            let file_path = path.join(format!("file_{}.{}", i, ext));
            fs::write(&file_path, format!("Test content {}", i)).unwrap();
        }

        for i in 0..dirs_per_level {
            let dir_path = path.join(format!("dir_{}", i));
            fs::create_dir(&dir_path).unwrap();
            create_level(dir_path.as_path(), current_depth + 1, max_depth, files_per_dir, dirs_per_level);
        }
    }

    create_level(temp_dir.path(), 0, depth, files_per_dir, dirs_per_level);
    temp_dir
}

fn walk_once(rt: &Runtime, root: &Path, resolve_owners: bool) {
    rt.block_on(async {
        let pool = SqlitePoolOptions::new().max_connections(1).connect("sqlite::memory:").await.unwrap();
        db::init_db(&pool).await.unwrap();
        let boundary = HostBoundary::new(vec![]);
        let owners: Box<dyn OwnerResolver> = if resolve_owners { platform_resolver() } else { Box::new(UnsupportedOwners) };
        let roots: Vec<PathBuf> = vec![root.to_path_buf()];
        let mut catalog = SqliteCatalog::begin(&pool).await.unwrap();
        let summary = index_roots(&mut catalog, &boundary, owners.as_ref(), &roots).await.unwrap();
        catalog.commit().await.unwrap();
        black_box(summary)
    });
}

fn benchmark_small_tree(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = create_test_tree(3, 10, 3);

    c.bench_function("walk_small_tree", |b| b.iter(|| walk_once(&rt, temp_dir.path(), true)));
}

fn benchmark_large_tree(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = create_test_tree(4, 20, 4);

    c.bench_function("walk_large_tree", |b| b.iter(|| walk_once(&rt, temp_dir.path(), true)));
}

fn benchmark_owner_lookup(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let temp_dir = create_test_tree(3, 15, 3);

    let mut group = c.benchmark_group("owner_lookup");
    for resolve in [false, true] {
        group.bench_with_input(BenchmarkId::from_parameter(resolve), &resolve, |b, &resolve| {
            b.iter(|| walk_once(&rt, temp_dir.path(), resolve))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_small_tree, benchmark_large_tree, benchmark_owner_lookup);
criterion_main!(benches);
