use models::{Brand, BrandDto, Category, CategoryDto};

/// Bidirectional conversion contract between a persisted entity and its
/// transfer representation. Implemented once per (entity, dto) pair; the
/// generic CRUD service only sees this trait.
pub trait EntityMapper: Send + Sync {
    type Entity;
    type Dto;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto;
    fn to_entity(&self, dto: &Self::Dto) -> Self::Entity;
}

pub struct BrandMapper;

impl EntityMapper for BrandMapper {
    type Entity = Brand;
    type Dto = BrandDto;

    fn to_dto(&self, entity: &Brand) -> BrandDto {
        BrandDto {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
            ..Default::default()
        }
    }

    // Edit lists and link rows are request-side only; they never map onto
    // the persisted record.
    fn to_entity(&self, dto: &BrandDto) -> Brand {
        Brand {
            id: dto.id,
            name: dto.name.clone(),
            description: dto.description.clone(),
        }
    }
}

pub struct CategoryMapper;

impl EntityMapper for CategoryMapper {
    type Entity = Category;
    type Dto = CategoryDto;

    fn to_dto(&self, entity: &Category) -> CategoryDto {
        CategoryDto {
            id: entity.id,
            name: entity.name.clone(),
            description: entity.description.clone(),
        }
    }

    fn to_entity(&self, dto: &CategoryDto) -> Category {
        Category {
            id: dto.id,
            name: dto.name.clone(),
            description: dto.description.clone(),
        }
    }
}
