// src/ecs/world.rs

// Any / TypeId: コンポーネントの型ごとにストレージを分けて持つために使うよ。
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use crate::components::pile::Pile;
use crate::components::stack::StackType;
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// コンポーネントの型ごとのストレージだよ！🗃️
///
/// `storage` は `HashMap<Entity, T>` を `Box<dyn Any>` で型消去したもの。
/// 取り出すときに `downcast` で元の型に戻す。
struct ComponentStoreEntry {
    storage: Box<dyn Any>,
}

/// ゲーム世界の全エンティティとコンポーネントを管理する構造体 (自作ECSのコア！)。
///
/// カードは `Card` + `StackInfo`、パイルは `Pile`、ゲーム全体は `GameState` を持つ
/// エンティティとしてここに入る。`StackInfo` の表がそのまま
/// 「このカードはどのパイルにいる？」の O(1) 逆引き表になってるよ。
pub struct World {
    /// 現在生存しているエンティティIDのセット。
    entities: HashSet<Entity>,
    /// 次に生成するエンティティに割り当てるID。
    next_entity_id: usize,
    /// コンポーネントの型 (TypeId) ごとのストレージ。
    component_stores: HashMap<TypeId, ComponentStoreEntry>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// 新しい空の World を作成する。
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを生成して返す。ID は 0 からの連番だよ。
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        trace!("World: Created entity with ID {}", entity.0);
        entity
    }

    /// 指定されたエンティティが生きてるか確認する。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 新しい型のコンポーネントを World に登録する。
    /// 同じ型を二回登録しても、既存のデータは消さずにそのまま使うよ。
    pub fn register_component<T: Component>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self.component_stores.contains_key(&type_id) {
            warn!(
                "World: Component type {} was registered more than once. Keeping existing storage.",
                std::any::type_name::<T>()
            );
            return;
        }
        trace!("World: Registering component type {}", std::any::type_name::<T>());

        let entry = ComponentStoreEntry {
            storage: Box::new(HashMap::<Entity, T>::new()),
        };
        self.component_stores.insert(type_id, entry);
    }

    /// エンティティにコンポーネントを追加する (同じ型があれば上書き)。
    ///
    /// 死んでるエンティティには追加しない (`false` を返す)。
    ///
    /// # パニック
    /// `register_component::<T>()` を呼び忘れてたらパニックする。World の組み立てミスだからね。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> bool {
        if !self.is_entity_alive(entity) {
            warn!("World: Attempted to add component to non-existent entity {}", entity.0);
            return false;
        }
        let storage = self
            .component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>());
        match storage {
            Some(storage) => {
                storage.insert(entity, component);
                true
            }
            None => panic!(
                "World: Component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    /// コンポーネントへの読み取り専用参照を取得する。
    /// 型が未登録・エンティティが持ってない、などの場合は `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの書き込み可能参照を取得する。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_mut::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get_mut(&entity))
    }

    /// 指定された型のコンポーネントを持つ生存エンティティを、ID の昇順で全部返す。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .component_stores
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.storage.downcast_ref::<HashMap<Entity, T>>())
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .collect()
            })
            .unwrap_or_default();
        // HashMap の順番はバラバラなので、呼び出し側が毎回同じ結果を見られるようにソート
        entities.sort();
        entities
    }

    /// 指定された `StackType` のパイルを表すエンティティを探す。
    pub fn find_entity_by_stack_type(&self, stack_type: StackType) -> Option<Entity> {
        let found = self
            .get_all_entities_with_component::<Pile>()
            .into_iter()
            .find(|&entity| {
                self.get_component::<Pile>(entity)
                    .map_or(false, |pile| pile.stack_type == stack_type)
            });
        if found.is_none() {
            trace!("World: No pile entity found for stack type {:?}", stack_type);
        }
        found
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
