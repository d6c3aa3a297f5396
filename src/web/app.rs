use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Error, Schema, http::GraphiQLSource};
use async_graphql_poem::GraphQL;
use poem::{Result, Route, Server, get, handler, listener::TcpListener, web::Html};
use tracing::info;

use crate::{
    routing::routing::Navigator,
    structures::{
        LngLat, RoutePreference, RouteQuery, Selection, TransportMode, TravelContext,
        plan::{MapStyle, Plan, SessionView},
    },
};

pub type RouteLensSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot;

#[async_graphql::Object]
impl QueryRoot {
    async fn ping(&self) -> &str {
        "pong"
    }

    async fn map_style(&self, ctx: &Context<'_>) -> Result<MapStyle, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.map_style())
    }

    async fn session(&self, ctx: &Context<'_>) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.session().await)
    }

    /// Plans a single trip without touching the shared session.
    async fn plan(
        &self,
        ctx: &Context<'_>,
        from_lat: f64,
        from_lng: f64,
        to_lat: f64,
        to_lng: f64,
        #[graphql(default)] mode: TransportMode,
        #[graphql(default)] context: TravelContext,
        #[graphql(default)] preference: RoutePreference,
    ) -> Result<Plan, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;

        let query = RouteQuery {
            start: LngLat::new(from_lng, from_lat).map_err(Error::new)?,
            end: LngLat::new(to_lng, to_lat).map_err(Error::new)?,
        };
        let selection = Selection {
            preference,
            context,
            mode,
        };

        Ok(navigator.plan(query, selection).await)
    }
}

pub struct MutationRoot;

#[async_graphql::Object]
impl MutationRoot {
    /// Map click. Ignored once two points are set.
    async fn add_point(&self, ctx: &Context<'_>, lng: f64, lat: f64) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        let point = LngLat::new(lng, lat).map_err(Error::new)?;
        Ok(navigator.add_point(point).await)
    }

    async fn set_preference(
        &self,
        ctx: &Context<'_>,
        preference: RoutePreference,
    ) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.set_preference(preference).await)
    }

    async fn set_context(
        &self,
        ctx: &Context<'_>,
        context: TravelContext,
    ) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.set_context(context).await)
    }

    async fn set_mode(&self, ctx: &Context<'_>, mode: TransportMode) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.set_mode(mode).await)
    }

    /// Close button: drops points, markers and the route layer.
    async fn reset(&self, ctx: &Context<'_>) -> Result<SessionView, Error> {
        let navigator = ctx.data::<Arc<Navigator>>()?;
        Ok(navigator.reset().await)
    }
}

#[handler]
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn schema(navigator: Arc<Navigator>) -> RouteLensSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(navigator)
        .finish()
}

pub fn app(navigator: Arc<Navigator>) -> Route {
    Route::new()
        .at("/graphql", GraphQL::new(schema(navigator)))
        .at("/graphiql", get(graphiql))
}

pub async fn server(navigator: Arc<Navigator>, bind: String) -> std::io::Result<()> {
    info!("Serving on {bind}");
    Server::new(TcpListener::bind(bind))
        .run(app(navigator))
        .await
}
