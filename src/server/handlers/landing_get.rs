use crate::{
    error::Error as RoomiesError,
    server::{
        app_state::AppState,
        page::{Layout, render_page},
    },
    users::{User, UserRole, UserRoleStore},
};
use actix_web::{HttpResponse, web};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LandingContent {
    headline: &'static str,
    tagline: &'static str,
    call_to_action_path: &'static str,
    features: [Section; 4],
    steps: [Section; 3],
}

#[derive(Serialize)]
struct Section {
    title: &'static str,
    description: &'static str,
}

impl LandingContent {
    fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Tenant => Self {
                headline: "Find Your Dream Home",
                tagline: "Discover your ideal living space with Roomies. We make house-hunting a breeze!",
                call_to_action_path: "/properties",
                features: [
                    Section {
                        title: "Smart Listings",
                        description: "Find properties tailored to your needs",
                    },
                    Section {
                        title: "Perfect Matches",
                        description: "Connect with compatible roommates",
                    },
                    Section {
                        title: "Secure Platform",
                        description: "Your data and transactions are always protected",
                    },
                    Section {
                        title: "Market Insights",
                        description: "Make informed decisions with real-time market data",
                    },
                ],
                steps: [
                    Section {
                        title: "Create Your Profile",
                        description: "Set your preferences and budget",
                    },
                    Section {
                        title: "Browse Listings",
                        description: "Find properties that match your criteria",
                    },
                    Section {
                        title: "Connect and Finalize",
                        description: "Schedule viewings and apply for your favorite homes",
                    },
                ],
            },
            UserRole::Landlord => Self {
                headline: "Connect with Perfect Tenants",
                tagline: "List your property and find reliable tenants effortlessly. Let Roomies simplify your rental process!",
                call_to_action_path: "/landlord/properties/new",
                features: [
                    Section {
                        title: "Smart Listings",
                        description: "Showcase your property to the right audience",
                    },
                    Section {
                        title: "Perfect Matches",
                        description: "Find reliable tenants that fit your criteria",
                    },
                    Section {
                        title: "Secure Platform",
                        description: "Your data and transactions are always protected",
                    },
                    Section {
                        title: "Market Insights",
                        description: "Set competitive prices with our market analysis",
                    },
                ],
                steps: [
                    Section {
                        title: "Create Your Profile",
                        description: "List your property details and requirements",
                    },
                    Section {
                        title: "Receive Applications",
                        description: "Review potential tenants' profiles",
                    },
                    Section {
                        title: "Connect and Finalize",
                        description: "Choose your ideal tenant and complete the agreement",
                    },
                ],
            },
        }
    }
}

pub async fn landing_get(
    state: web::Data<AppState>,
    user: Option<User>,
    role_store: UserRoleStore,
) -> Result<HttpResponse, RoomiesError> {
    let layout = Layout::new("Home", user, &role_store);
    render_page(
        &state,
        "landing",
        &layout,
        LandingContent::for_role(role_store.role()),
    )
}
