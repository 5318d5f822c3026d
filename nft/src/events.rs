use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RegistryEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Transfer(u64, Address, Address),
}

impl RegistryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistryEvent::Initialized => stringify!(Initialized),
            RegistryEvent::Upgraded(..) => stringify!(Upgraded),
            RegistryEvent::Mint(..) => stringify!(Mint),
            RegistryEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            RegistryEvent::Initialized => {}
            RegistryEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            RegistryEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            RegistryEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
