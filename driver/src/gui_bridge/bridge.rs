use crate::gui_bridge::model::{
    ClusterQuery, GalleryReply, JumpRequest, NavigateRequest, OpenRequest,
};
use crate::workflow::runner::Runner;
use log::{error, info};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
};
use tokio::runtime::Builder;
use travelcore::gallery::{drive, AutoplayHandle, Direction};
#[cfg(test)]
use travelcore::GallerySnapshot;
use travelcore::{GalleryNavigator, VisitId};
use warp::{Filter, Rejection, Reply};

type SharedNavigator = Arc<Mutex<GalleryNavigator>>;

#[derive(Debug)]
struct BridgeError;

impl warp::reject::Reject for BridgeError {}

/// The single mutator lock; a panic mid-update never leaves the index out of range.
fn lock(navigator: &Mutex<GalleryNavigator>) -> MutexGuard<'_, GalleryNavigator> {
    navigator.lock().unwrap_or_else(PoisonError::into_inner)
}

fn reply(changed: bool, navigator: &GalleryNavigator) -> warp::reply::Json {
    warp::reply::json(&GalleryReply {
        changed,
        gallery: navigator.snapshot(),
    })
}

/// Spawns the timer task for a freshly armed autoplay handle. The task ends on
/// the first tick after the handle goes stale.
fn spawn_autoplay(navigator: SharedNavigator, handle: AutoplayHandle) {
    let period = lock(&navigator).autoplay_interval();
    tokio::spawn(async move {
        let ticks = drive(handle, period, |handle| lock(&navigator).autoplay_tick(handle)).await;
        info!("autoplay timer finished after {} ticks", ticks);
    });
}

/// HTTP bridge exposing the viewer state to a rendering front-end.
pub struct GuiBridge {
    navigator: SharedNavigator,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let navigator = GalleryNavigator::new(runner.visits(), &runner.config().viewer);
        Self {
            navigator: Arc::new(Mutex::new(navigator)),
            runner,
        }
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let navigator = self.navigator.clone();
        let navigator_filter = warp::any().map(move || navigator.clone());
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());

        let summary_route = warp::path!("summary")
            .and(warp::get())
            .and(runner_filter.clone())
            .and_then(|runner: Arc<Runner>| async move {
                match runner.summarize() {
                    Ok(summary) => Ok::<_, Rejection>(warp::reply::json(&summary)),
                    Err(err) => {
                        error!("summary error: {:#}", err);
                        Err(warp::reject::custom(BridgeError))
                    }
                }
            });

        let clusters_route = warp::path!("clusters")
            .and(warp::get())
            .and(warp::query::<ClusterQuery>())
            .and(runner_filter)
            .and_then(|query: ClusterQuery, runner: Arc<Runner>| async move {
                let zoom = query.zoom.unwrap_or(runner.config().map.zoom);
                match runner.cluster_reports(zoom) {
                    Ok(reports) => Ok::<_, Rejection>(warp::reply::json(&reports)),
                    Err(err) => {
                        error!("cluster error: {:#}", err);
                        Err(warp::reject::custom(BridgeError))
                    }
                }
            });

        let gallery_route = warp::path!("gallery")
            .and(warp::get())
            .and(navigator_filter.clone())
            .map(|navigator: SharedNavigator| warp::reply::json(&lock(&navigator).snapshot()));

        let open_route = warp::path!("gallery" / "open")
            .and(warp::post())
            .and(warp::body::json())
            .and(navigator_filter.clone())
            .map(|request: OpenRequest, navigator: SharedNavigator| {
                let mut guard = lock(&navigator);
                let start = request.start.as_deref();
                let changed = match request.visit {
                    Some(visit) => guard.open_scoped(VisitId(visit), start),
                    None => guard.open_global(start),
                };
                reply(changed, &guard)
            });

        let navigate_route = warp::path!("gallery" / "navigate")
            .and(warp::post())
            .and(warp::body::json())
            .and(navigator_filter.clone())
            .map(|request: NavigateRequest, navigator: SharedNavigator| {
                let mut guard = lock(&navigator);
                let changed = match Direction::from_step(request.direction) {
                    Some(direction) => guard.navigate(direction),
                    None => false,
                };
                reply(changed, &guard)
            });

        let jump_route = warp::path!("gallery" / "jump")
            .and(warp::post())
            .and(warp::body::json())
            .and(navigator_filter.clone())
            .map(|request: JumpRequest, navigator: SharedNavigator| {
                let mut guard = lock(&navigator);
                let changed = guard.jump_to(request.index);
                reply(changed, &guard)
            });

        let close_route = warp::path!("gallery" / "close")
            .and(warp::post())
            .and(navigator_filter.clone())
            .map(|navigator: SharedNavigator| {
                let mut guard = lock(&navigator);
                let changed = guard.close();
                reply(changed, &guard)
            });

        let autoplay_route = warp::path!("autoplay" / "toggle")
            .and(warp::post())
            .and(navigator_filter)
            .map(|navigator: SharedNavigator| {
                let (was_active, armed) = {
                    let mut guard = lock(&navigator);
                    let was_active = guard.is_autoplay_active();
                    (was_active, guard.toggle_autoplay())
                };
                if let Some(handle) = armed {
                    spawn_autoplay(navigator.clone(), handle);
                }
                let guard = lock(&navigator);
                reply(was_active || armed.is_some(), &guard)
            });

        summary_route
            .or(clusters_route)
            .or(gallery_route)
            .or(open_route)
            .or(navigate_route)
            .or(jump_route)
            .or(close_route)
            .or(autoplay_route)
    }

    /// Serves the routes from a background thread with its own runtime.
    pub fn spawn(&self, addr: SocketAddr) -> thread::JoinHandle<()> {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                info!("bridge listening on {}", addr);
                warp::serve(routes).run(addr).await;
            });
        })
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> GallerySnapshot {
        lock(&self.navigator).snapshot()
    }

    #[cfg(test)]
    fn navigator(&self) -> SharedNavigator {
        self.navigator.clone()
    }
}
